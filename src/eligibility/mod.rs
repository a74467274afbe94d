pub mod checker;
pub mod window;

pub use checker::{days_between, EligibilityChecker, EligibilityReport};
pub use window::{Eligibility, EligibilityWindow, DEFAULT_WINDOW_DAYS};
