use chrono::{Datelike, Months, NaiveDate};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::theme::Theme;
use crate::utils;

/// Interactive month-grid date picker.
///
/// The cursor always points at a valid calendar day; selection is explicit,
/// so a picker can be on screen with no date chosen yet.
pub struct DatePicker {
    title: String,
    cursor: NaiveDate,
    selected: Option<NaiveDate>,
}

impl DatePicker {
    pub fn new(title: &str, cursor: NaiveDate) -> Self {
        Self {
            title: title.to_string(),
            cursor,
            selected: None,
        }
    }

    pub fn with_selected(title: &str, date: NaiveDate) -> Self {
        Self {
            title: title.to_string(),
            cursor: date,
            selected: Some(date),
        }
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Select the day under the cursor.
    pub fn select_cursor(&mut self) {
        self.selected = Some(self.cursor);
    }

    /// Jump cursor and selection to the given date.
    pub fn set(&mut self, date: NaiveDate) {
        self.cursor = date;
        self.selected = Some(date);
    }

    /// Drop the selection, leaving the cursor in place.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn move_days(&mut self, days: i64) {
        if let Some(next) = self.cursor.checked_add_signed(chrono::Duration::days(days)) {
            self.cursor = next;
        }
    }

    /// Step by whole months; the day-of-month clamps to the target month's
    /// length (Jan 31 + 1 month = Feb 29 in a leap year).
    pub fn move_months(&mut self, months: i32) {
        let step = Months::new(months.unsigned_abs());
        let next = if months >= 0 {
            self.cursor.checked_add_months(step)
        } else {
            self.cursor.checked_sub_months(step)
        };
        if let Some(next) = next {
            self.cursor = next;
        }
    }

    pub fn move_years(&mut self, years: i32) {
        self.move_months(years.saturating_mul(12));
    }

    /// Weeks of the cursor's month, Sunday-first, padded with `None`.
    pub fn month_grid(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let first = self
            .cursor
            .with_day(1)
            .expect("first of month is always a valid date");
        let offset = first.weekday().num_days_from_sunday() as usize;
        let days = days_in_month(first.year(), first.month());

        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut col = offset;
        for day in 1..=days {
            week[col] = NaiveDate::from_ymd_opt(first.year(), first.month(), day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }
        weeks
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        focused: bool,
        today: NaiveDate,
    ) {
        let border_style = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.border)
        };
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(border_style);

        let mut lines = Vec::with_capacity(10);
        lines.push(Line::from(Span::styled(
            self.cursor.format(" %B %Y").to_string(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            " Su Mo Tu We Th Fr Sa",
            Style::default().fg(theme.muted),
        )));

        for week in self.month_grid() {
            let mut spans = Vec::with_capacity(7);
            for day in week {
                match day {
                    Some(date) => {
                        let mut style = Style::default().fg(theme.foreground);
                        if date == today {
                            style = style.add_modifier(Modifier::UNDERLINED);
                        }
                        if Some(date) == self.selected {
                            style = style.fg(theme.eligible).add_modifier(Modifier::BOLD);
                        }
                        if date == self.cursor {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        spans.push(Span::styled(format!(" {:>2}", date.day()), style));
                    }
                    None => spans.push(Span::raw("   ")),
                }
            }
            lines.push(Line::from(spans));
        }

        let footer = match self.selected {
            Some(date) => format!(" selected: {}", utils::format_date(date)),
            None => " no date selected".to_string(),
        };
        lines.push(Line::from(Span::styled(
            footer,
            Style::default().fg(theme.muted),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Number of days in a month, leap Februaries included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn grid_starts_on_the_right_weekday() {
        // 2024-01-01 is a Monday, so the first week pads one Sunday slot.
        let picker = DatePicker::new("test", date(2024, 1, 15));
        let grid = picker.month_grid();
        assert!(grid[0][0].is_none());
        assert_eq!(grid[0][1], Some(date(2024, 1, 1)));

        let days: Vec<NaiveDate> = grid.iter().flatten().filter_map(|d| *d).collect();
        assert_eq!(days.len(), 31);
        assert_eq!(days.first().copied(), Some(date(2024, 1, 1)));
        assert_eq!(days.last().copied(), Some(date(2024, 1, 31)));
    }

    #[test]
    fn month_step_clamps_the_day() {
        let mut picker = DatePicker::new("test", date(2024, 1, 31));
        picker.move_months(1);
        assert_eq!(picker.cursor(), date(2024, 2, 29));
        picker.move_months(-1);
        assert_eq!(picker.cursor(), date(2024, 1, 29));
    }

    #[test]
    fn year_step_keeps_the_month() {
        let mut picker = DatePicker::new("test", date(2024, 2, 29));
        picker.move_years(-1);
        assert_eq!(picker.cursor(), date(2023, 2, 28));
    }

    #[test]
    fn selection_survives_cursor_moves() {
        let start = date(2024, 1, 1);
        let mut picker = DatePicker::new("test", start);
        picker.select_cursor();
        picker.move_days(7);
        assert_eq!(picker.selected(), Some(start));
        assert_eq!(picker.cursor(), date(2024, 1, 8));
    }

    #[test]
    fn clear_drops_only_the_selection() {
        let mut picker = DatePicker::with_selected("test", date(2024, 1, 1));
        picker.clear();
        assert_eq!(picker.selected(), None);
        assert_eq!(picker.cursor(), date(2024, 1, 1));
    }
}
