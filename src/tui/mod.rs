pub mod app;
pub mod datepicker;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::error::Result;
use crate::time::SystemClock;
use event::{Event, EventHandler};

/// Run the interactive calculator until the user quits.
pub async fn run_tui(config: Config) -> Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config, Box::new(SystemClock));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(tick_rate);
    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore the terminal even when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render_ui(frame, app))?;

        match events.next().await {
            Some(Event::Key(key)) => app.on_key(key),
            Some(Event::Tick) | Some(Event::Resize(_, _)) => {}
            None => break,
        }
    }
    Ok(())
}
