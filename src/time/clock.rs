use chrono::NaiveDate;

/// Source of the current date.
///
/// The calculator never reads system time directly; the shells inject a
/// clock so the "date to check" default stays deterministic under test.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Today's date, with no time-of-day component.
    fn today(&self) -> NaiveDate;
}
