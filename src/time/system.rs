use chrono::{Local, NaiveDate};

use crate::time::clock::Clock;

/// [`Clock`] backed by the operating system clock in local time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn system_clock_returns_a_plausible_date() {
        let today = SystemClock.today();
        assert!(today.year() >= 2024);
        assert!((1..=12).contains(&today.month()));
        assert!((1..=31).contains(&today.day()));
    }
}
