use serde::Serialize;

/// Default eligibility window: coverage may be purchased up to 60 days
/// after the date of purchase.
pub const DEFAULT_WINDOW_DAYS: u32 = 60;

/// Classification of a day count against the eligibility window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Eligibility {
    /// Nothing elapsed (count 0). Rendered neutral.
    Unset,
    /// Strictly inside the window.
    Eligible,
    /// Exactly on the window boundary. Coverage must be purchased today.
    LastDay,
    /// Past the window.
    Expired,
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible | Eligibility::LastDay)
    }
}

impl std::fmt::Display for Eligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Eligibility::Unset => write!(f, "unset"),
            Eligibility::Eligible => write!(f, "eligible"),
            Eligibility::LastDay => write!(f, "last day"),
            Eligibility::Expired => write!(f, "expired"),
        }
    }
}

/// Threshold policy that classifies a day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityWindow {
    window_days: u32,
}

impl EligibilityWindow {
    pub fn new(window_days: u32) -> Self {
        Self { window_days }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Classify a day count. Total over all counts, no failure modes.
    pub fn classify(&self, days: u32) -> Eligibility {
        if days == 0 {
            Eligibility::Unset
        } else if days < self.window_days {
            Eligibility::Eligible
        } else if days == self.window_days {
            Eligibility::LastDay
        } else {
            Eligibility::Expired
        }
    }
}

impl Default for EligibilityWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        let window = EligibilityWindow::default();
        assert_eq!(window.classify(0), Eligibility::Unset);
        assert_eq!(window.classify(1), Eligibility::Eligible);
        assert_eq!(window.classify(59), Eligibility::Eligible);
        assert_eq!(window.classify(60), Eligibility::LastDay);
        assert_eq!(window.classify(61), Eligibility::Expired);
        assert_eq!(window.classify(u32::MAX), Eligibility::Expired);
    }

    #[test]
    fn classify_is_pure() {
        let window = EligibilityWindow::default();
        assert_eq!(window.classify(60), window.classify(60));
        assert_eq!(window.classify(0), window.classify(0));
    }

    #[test]
    fn custom_window_shifts_the_boundaries() {
        let window = EligibilityWindow::new(30);
        assert_eq!(window.classify(29), Eligibility::Eligible);
        assert_eq!(window.classify(30), Eligibility::LastDay);
        assert_eq!(window.classify(31), Eligibility::Expired);
    }

    #[test]
    fn last_day_still_counts_as_eligible() {
        assert!(Eligibility::Eligible.is_eligible());
        assert!(Eligibility::LastDay.is_eligible());
        assert!(!Eligibility::Unset.is_eligible());
        assert!(!Eligibility::Expired.is_eligible());
    }
}
