use chrono::NaiveDate;
use colored::{ColoredString, Colorize};

use crate::eligibility::Eligibility;
use crate::error::Result;

/// Date format used wherever dates cross a text boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date from `YYYY-MM-DD`.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)?)
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Color a day count for terminal output the same way the result panel
/// colors it.
pub fn colorize_days(days: u32, status: Eligibility) -> ColoredString {
    let text = days.to_string();
    match status {
        Eligibility::Unset => text.white(),
        Eligibility::Eligible => text.green(),
        Eligibility::LastDay => text.yellow(),
        Eligibility::Expired => text.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_date("2024-01-01").unwrap();
        assert_eq!(format_date(date), "2024-01-01");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(parse_date(" 2024-02-29 ").is_ok());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_date("01/02/2024").is_err());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("not a date").is_err());
        assert!(parse_date("").is_err());
    }
}
