use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::eligibility::window::{Eligibility, EligibilityWindow};

/// Count whole days from `purchase` to `check` by walking the calendar one
/// day at a time. The walk never runs backwards: a check date on or before
/// the purchase date yields 0.
pub fn days_between(purchase: NaiveDate, check: NaiveDate) -> u32 {
    let mut cursor = purchase;
    let mut days = 0u32;
    while cursor < check {
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            // End of chrono's calendar range.
            None => break,
        }
        days += 1;
    }
    days
}

/// Outcome of a single check action.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityReport {
    pub purchase_date: NaiveDate,
    pub check_date: NaiveDate,
    pub days: u32,
    pub status: Eligibility,
}

/// Runs check actions against a fixed eligibility window.
pub struct EligibilityChecker {
    window: EligibilityWindow,
}

impl EligibilityChecker {
    pub fn new(window: EligibilityWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &EligibilityWindow {
        &self.window
    }

    /// Count the days since the purchase date and classify them.
    pub fn check(&self, purchase_date: NaiveDate, check_date: NaiveDate) -> EligibilityReport {
        let days = days_between(purchase_date, check_date);
        let status = self.window.classify(days);
        debug!(
            "check {} -> {}: {} days, {}",
            purchase_date, check_date, days, status
        );
        EligibilityReport {
            purchase_date,
            check_date,
            days,
            status,
        }
    }

    /// Human-readable explanation for a report.
    pub fn reason(&self, report: &EligibilityReport) -> String {
        let window = self.window.window_days();
        match report.status {
            Eligibility::Unset => "No days have elapsed since the date of purchase".to_string(),
            Eligibility::Eligible => format!(
                "Eligible to purchase coverage ({} of {} window days remaining)",
                window - report.days,
                window
            ),
            Eligibility::LastDay => format!(
                "Day {} of {}: coverage must be purchased today",
                report.days, window
            ),
            Eligibility::Expired => {
                format!("Window expired {} days ago", report.days - window)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_counts_zero() {
        let day = date(2024, 1, 1);
        assert_eq!(days_between(day, day), 0);
    }

    #[test]
    fn reversed_dates_count_zero() {
        // The walk never runs backwards, so a check date before the
        // purchase date yields 0 rather than an error.
        assert_eq!(days_between(date(2024, 3, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn next_day_counts_one() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 2)), 1);
    }

    #[test]
    fn leap_february_is_counted() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 3, 1)), 60);
    }

    #[test]
    fn year_boundary_is_counted() {
        assert_eq!(days_between(date(2023, 12, 31), date(2024, 1, 1)), 1);
    }

    #[test]
    fn sixtieth_day_is_the_last_day() {
        let checker = EligibilityChecker::new(EligibilityWindow::default());
        let report = checker.check(date(2024, 1, 1), date(2024, 3, 1));
        assert_eq!(report.days, 60);
        assert_eq!(report.status, Eligibility::LastDay);
    }

    #[test]
    fn sixty_first_day_is_expired() {
        let checker = EligibilityChecker::new(EligibilityWindow::default());
        let report = checker.check(date(2024, 1, 1), date(2024, 3, 2));
        assert_eq!(report.days, 61);
        assert_eq!(report.status, Eligibility::Expired);
    }

    #[test]
    fn common_year_window_lands_a_day_later() {
        let checker = EligibilityChecker::new(EligibilityWindow::default());
        let report = checker.check(date(2023, 1, 1), date(2023, 3, 2));
        assert_eq!(report.days, 60);
        assert_eq!(report.status, Eligibility::LastDay);
    }

    #[test]
    fn reason_reflects_the_window() {
        let checker = EligibilityChecker::new(EligibilityWindow::default());

        let eligible = checker.check(date(2024, 1, 1), date(2024, 1, 2));
        assert!(checker.reason(&eligible).contains("59 of 60"));

        let expired = checker.check(date(2024, 1, 1), date(2024, 3, 3));
        assert!(checker.reason(&expired).contains("expired 2 days ago"));
    }

    #[test]
    fn report_serializes_to_json() {
        let checker = EligibilityChecker::new(EligibilityWindow::default());
        let report = checker.check(date(2024, 1, 1), date(2024, 3, 1));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"days\":60"));
        assert!(json.contains("LastDay"));
    }
}
