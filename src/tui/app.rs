use chrono::{NaiveDate, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::warn;
use tui_input::backend::crossterm::EventHandler as _;
use tui_input::Input;

use crate::config::Config;
use crate::eligibility::{EligibilityChecker, EligibilityReport, EligibilityWindow};
use crate::time::Clock;
use crate::tui::datepicker::DatePicker;
use crate::tui::theme::Theme;
use crate::utils;

const MAX_LOG_LINES: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Purchase,
    CheckDate,
}

/// All state owned by the interactive calculator.
///
/// Both pickers, the last report, and the activity log live here; nothing
/// is shared or static, and every action mutates this one value on the
/// event task.
pub struct App {
    pub focus: Focus,
    pub purchase: DatePicker,
    pub check_date: DatePicker,
    pub report: Option<EligibilityReport>,
    pub status_message: String,
    pub logs: Vec<String>,
    pub should_quit: bool,
    pub editor: Option<Input>,
    pub theme: Theme,
    checker: EligibilityChecker,
    clock: Box<dyn Clock>,
}

impl App {
    pub fn new(config: Config, clock: Box<dyn Clock>) -> Self {
        let today = clock.today();
        Self {
            focus: Focus::Purchase,
            purchase: DatePicker::new("Date of Purchase", today),
            check_date: DatePicker::with_selected("Date to Check", today),
            report: None,
            status_message: "Select a date of purchase".to_string(),
            logs: Vec::new(),
            should_quit: false,
            editor: None,
            theme: Theme::from_name(&config.ui.theme),
            checker: EligibilityChecker::new(EligibilityWindow::new(
                config.eligibility.window_days,
            )),
            clock,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn window_days(&self) -> u32 {
        self.checker.window().window_days()
    }

    /// The check action is enabled once a purchase date is selected.
    pub fn can_check(&self) -> bool {
        self.purchase.selected().is_some()
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.editor.is_some() {
            self.on_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char('c') => self.check(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('e') => self.open_editor(),
            KeyCode::Char('t') => {
                let today = self.clock.today();
                self.focused_picker_mut().set(today);
            }
            KeyCode::Enter => self.select_focused(),
            KeyCode::Backspace | KeyCode::Delete | KeyCode::Char('d') => self.clear_focused(),
            KeyCode::Left | KeyCode::Char('h') => self.focused_picker_mut().move_days(-1),
            KeyCode::Right | KeyCode::Char('l') => self.focused_picker_mut().move_days(1),
            KeyCode::Up | KeyCode::Char('k') => self.focused_picker_mut().move_days(-7),
            KeyCode::Down | KeyCode::Char('j') => self.focused_picker_mut().move_days(7),
            KeyCode::PageUp | KeyCode::Char('[') => self.focused_picker_mut().move_months(-1),
            KeyCode::PageDown | KeyCode::Char(']') => self.focused_picker_mut().move_months(1),
            KeyCode::Char('{') => self.focused_picker_mut().move_years(-1),
            KeyCode::Char('}') => self.focused_picker_mut().move_years(1),
            _ => {}
        }
    }

    /// Run the check action. A no-op until a purchase date is selected.
    pub fn check(&mut self) {
        let Some(purchase) = self.purchase.selected() else {
            self.status_message = "Select a date of purchase first".to_string();
            return;
        };
        let check_date = self
            .check_date
            .selected()
            .unwrap_or_else(|| self.clock.today());

        let report = self.checker.check(purchase, check_date);
        self.add_log(&format!(
            "checked {} -> {}: {} days ({})",
            utils::format_date(report.purchase_date),
            utils::format_date(report.check_date),
            report.days,
            report.status
        ));
        self.status_message = self.checker.reason(&report);
        self.report = Some(report);
    }

    /// Back to the initial state: no purchase date, check date reset to
    /// today, nothing computed, check disabled.
    pub fn reset(&mut self) {
        let today = self.clock.today();
        self.purchase.clear();
        self.check_date.set(today);
        self.report = None;
        self.focus = Focus::Purchase;
        self.status_message = "Select a date of purchase".to_string();
        self.add_log("reset");
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Purchase => Focus::CheckDate,
            Focus::CheckDate => Focus::Purchase,
        };
    }

    fn select_focused(&mut self) {
        let first_purchase = self.focus == Focus::Purchase && !self.can_check();
        self.focused_picker_mut().select_cursor();
        if first_purchase {
            self.status_message = "Purchase date selected, press c to check".to_string();
        }
    }

    fn clear_focused(&mut self) {
        self.focused_picker_mut().clear();
        if self.focus == Focus::Purchase {
            self.status_message = "Select a date of purchase".to_string();
        }
    }

    fn open_editor(&mut self) {
        let initial = match self.focused_picker().selected() {
            Some(date) => utils::format_date(date),
            None => String::new(),
        };
        self.editor = Some(Input::new(initial));
    }

    fn on_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.editor = None,
            KeyCode::Enter => self.commit_editor(),
            _ => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.handle_event(&crossterm::event::Event::Key(key));
                }
            }
        }
    }

    /// Parse the typed date and apply it to the focused picker. A malformed
    /// entry is recoverable: it is logged and nothing on screen changes.
    fn commit_editor(&mut self) {
        let Some(editor) = self.editor.take() else {
            return;
        };
        match utils::parse_date(editor.value()) {
            Ok(date) => {
                let first_purchase = self.focus == Focus::Purchase && !self.can_check();
                self.focused_picker_mut().set(date);
                self.add_log(&format!("entered {}", utils::format_date(date)));
                if first_purchase {
                    self.status_message = "Purchase date selected, press c to check".to_string();
                }
            }
            Err(e) => {
                warn!("date entry rejected: {}", e);
                self.add_log(&format!("rejected date entry: {}", e));
            }
        }
    }

    fn focused_picker(&self) -> &DatePicker {
        match self.focus {
            Focus::Purchase => &self.purchase,
            Focus::CheckDate => &self.check_date,
        }
    }

    fn focused_picker_mut(&mut self) -> &mut DatePicker {
        match self.focus {
            Focus::Purchase => &mut self.purchase,
            Focus::CheckDate => &mut self.check_date,
        }
    }

    fn add_log(&mut self, message: &str) {
        let timestamp = Utc::now().format("%H:%M:%S");
        self.logs.push(format!("[{}] {}", timestamp, message));
        if self.logs.len() > MAX_LOG_LINES {
            self.logs.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EligibilityConfig, UiConfig};
    use crate::eligibility::Eligibility;
    use crate::time::clock::MockClock;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_config() -> Config {
        Config {
            eligibility: EligibilityConfig { window_days: 60 },
            ui: UiConfig {
                theme: "default".to_string(),
                tick_rate_ms: 250,
            },
        }
    }

    fn app_at(today: NaiveDate) -> App {
        let mut clock = MockClock::new();
        clock.expect_today().return_const(today);
        App::new(test_config(), Box::new(clock))
    }

    #[test]
    fn starts_with_no_purchase_date_and_today_preselected() {
        let today = date(2024, 3, 1);
        let app = app_at(today);
        assert_eq!(app.purchase.selected(), None);
        assert_eq!(app.check_date.selected(), Some(today));
        assert!(!app.can_check());
        assert!(app.report.is_none());
    }

    #[test]
    fn check_is_a_no_op_without_a_purchase_date() {
        let mut app = app_at(date(2024, 3, 1));
        app.check();
        assert!(app.report.is_none());
    }

    #[test]
    fn check_classifies_against_the_selected_dates() {
        let mut app = app_at(date(2024, 3, 1));
        app.purchase.set(date(2024, 1, 1));
        app.check();

        let report = app.report.as_ref().unwrap();
        assert_eq!(report.days, 60);
        assert_eq!(report.status, Eligibility::LastDay);
    }

    #[test]
    fn reset_returns_to_the_initial_state() {
        let today = date(2024, 3, 2);
        let mut app = app_at(today);
        app.purchase.set(date(2024, 1, 1));
        app.check();
        assert_eq!(app.report.as_ref().unwrap().status, Eligibility::Expired);

        app.reset();
        assert!(app.report.is_none());
        assert_eq!(app.purchase.selected(), None);
        assert_eq!(app.check_date.selected(), Some(today));
        assert!(!app.can_check());

        // Still disabled until a new purchase date is selected.
        app.check();
        assert!(app.report.is_none());
    }

    #[test]
    fn enter_selects_the_cursor_day() {
        let today = date(2024, 3, 1);
        let mut app = app_at(today);
        app.on_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.purchase.selected(), Some(today));
        assert!(app.can_check());
    }

    #[test]
    fn typed_date_sets_the_focused_picker() {
        let mut app = app_at(date(2024, 3, 1));
        app.on_key(KeyEvent::from(KeyCode::Char('e')));
        for ch in "2024-01-01".chars() {
            app.on_key(KeyEvent::from(KeyCode::Char(ch)));
        }
        app.on_key(KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.purchase.selected(), Some(date(2024, 1, 1)));
        assert!(app.editor.is_none());
    }

    #[test]
    fn rejected_date_entry_leaves_the_result_alone() {
        let mut app = app_at(date(2024, 3, 1));
        app.purchase.set(date(2024, 1, 1));
        app.check();

        app.on_key(KeyEvent::from(KeyCode::Char('e')));
        for ch in "not a date".chars() {
            app.on_key(KeyEvent::from(KeyCode::Char(ch)));
        }
        app.on_key(KeyEvent::from(KeyCode::Enter));

        assert_eq!(app.purchase.selected(), Some(date(2024, 1, 1)));
        assert_eq!(app.report.as_ref().unwrap().days, 60);
    }

    #[test]
    fn quit_key_sets_the_flag() {
        let mut app = app_at(date(2024, 3, 1));
        app.on_key(KeyEvent::from(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
