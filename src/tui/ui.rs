use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::eligibility::Eligibility;
use crate::tui::app::{App, Focus};
use crate::utils;

pub fn render_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(12), // Date pickers
            Constraint::Min(7),     // Result + activity
            Constraint::Length(3),  // Status bar
        ])
        .split(frame.size());

    render_header(frame, chunks[0], app);
    render_pickers(frame, chunks[1], app);
    render_result(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            "SinceDOP",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  days since date of purchase  "),
        Span::styled(
            format!("window: {} days", app.window_days()),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let paragraph = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn render_pickers(frame: &mut Frame, area: Rect, app: &App) {
    let today = app.today();
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    app.purchase.render(
        frame,
        halves[0],
        &app.theme,
        app.focus == Focus::Purchase,
        today,
    );
    app.check_date.render(
        frame,
        halves[1],
        &app.theme,
        app.focus == Focus::CheckDate,
        today,
    );
}

fn render_result(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_count(frame, halves[0], app);
    render_activity(frame, halves[1], app);
}

fn render_count(frame: &mut Frame, area: Rect, app: &App) {
    let (days, status) = match &app.report {
        Some(report) => (report.days, report.status),
        None => (0, Eligibility::Unset),
    };
    let color = app.theme.status_color(status);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} days", days),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(status.to_string(), Style::default().fg(color))),
    ];
    if let Some(report) = &app.report {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "{} -> {}",
                utils::format_date(report.purchase_date),
                utils::format_date(report.check_date)
            ),
            Style::default().fg(Color::Gray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Days since DOP ").borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn render_activity(frame: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.logs.len().saturating_sub(visible);
    let lines: Vec<Line> = app.logs[start..]
        .iter()
        .map(|entry| Line::from(Span::styled(entry.clone(), Style::default().fg(Color::Gray))))
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().title(" Activity ").borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL);

    // Direct-entry mode takes over the status line.
    if let Some(editor) = &app.editor {
        let label = "Date (YYYY-MM-DD): ";
        let text = Line::from(vec![
            Span::styled(label, Style::default().fg(app.theme.accent)),
            Span::raw(editor.value().to_string()),
        ]);
        frame.render_widget(Paragraph::new(text).block(block), area);
        frame.set_cursor(
            area.x + 1 + label.len() as u16 + editor.visual_cursor() as u16,
            area.y + 1,
        );
        return;
    }

    let focus_label = match app.focus {
        Focus::Purchase => " Date of Purchase ",
        Focus::CheckDate => " Date to Check ",
    };
    let check_style = if app.can_check() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(app.theme.muted)
    };

    let text = Line::from(vec![
        Span::styled(
            focus_label,
            Style::default()
                .fg(Color::Black)
                .bg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(app.status_message.clone(), Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled("Enter: Select", Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        Span::styled("c: Check", check_style),
        Span::raw(" | "),
        Span::styled("r: Reset", Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        Span::styled("e: Type date", Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        Span::styled("q: Quit", Style::default().fg(Color::Red)),
    ]);

    frame.render_widget(Paragraph::new(text).block(block), area);
}
