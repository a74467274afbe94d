use ratatui::style::Color;

use crate::eligibility::Eligibility;

pub struct Theme {
    pub accent: Color,
    pub unset: Color,
    pub eligible: Color,
    pub last_day: Color,
    pub expired: Color,
    pub foreground: Color,
    pub border: Color,
    pub muted: Color,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::default(),
        }
    }

    pub fn default() -> Self {
        Self {
            accent: Color::Cyan,
            unset: Color::White,
            eligible: Color::Green,
            last_day: Color::Yellow,
            expired: Color::Red,
            foreground: Color::White,
            border: Color::Gray,
            muted: Color::DarkGray,
        }
    }

    pub fn dark() -> Self {
        Self {
            accent: Color::Rgb(100, 200, 255),
            unset: Color::Rgb(220, 220, 230),
            eligible: Color::Rgb(100, 255, 100),
            last_day: Color::Rgb(255, 200, 100),
            expired: Color::Rgb(255, 100, 100),
            foreground: Color::Rgb(220, 220, 230),
            border: Color::Rgb(60, 60, 80),
            muted: Color::Rgb(120, 120, 140),
        }
    }

    /// Color for a day-count classification.
    pub fn status_color(&self, status: Eligibility) -> Color {
        match status {
            Eligibility::Unset => self.unset,
            Eligibility::Eligible => self.eligible,
            Eligibility::LastDay => self.last_day,
            Eligibility::Expired => self.expired,
        }
    }
}
