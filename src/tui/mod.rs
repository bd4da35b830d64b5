pub mod state;
pub mod view;

use crate::calendar::Calendar;
use crate::config::CalendarOptions;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use directories::ProjectDirs;
use flexi_logger::{FileSpec, LoggerHandle};
use ratatui::{Terminal, backend::CrosstermBackend};
use state::AppState;
use std::io;
use std::time::Duration;

/// Loads the user configuration and runs the calendar until quit.
pub fn run() -> Result<()> {
    let _logger = init_logging();

    let options = CalendarOptions::load()?;
    let calendar = Calendar::with_callback(
        options,
        Box::new(|day, events| {
            log::info!("day {} activated with {} event(s)", day, events.len());
        }),
    )
    .map_err(anyhow::Error::msg)?;

    run_widget(calendar)
}

/// Runs the TUI frontend for an already-built calendar.
pub fn run_widget(calendar: Calendar) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(calendar);
    let result = event_loop(&mut terminal, &mut app_state);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| view::draw(f, state))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Left | KeyCode::Char('h') => state.move_selection(-1),
                KeyCode::Right | KeyCode::Char('l') => state.move_selection(1),
                KeyCode::Up | KeyCode::Char('k') => state.move_selection(-7),
                KeyCode::Down | KeyCode::Char('j') => state.move_selection(7),
                KeyCode::Char('n') | KeyCode::PageDown => state.change_month(1),
                KeyCode::Char('p') | KeyCode::PageUp => state.change_month(-1),
                KeyCode::Char('t') => state.go_to_today(),
                KeyCode::Enter | KeyCode::Char(' ') => state.activate_selected(),
                _ => {}
            },
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(_) = mouse.kind {
                    state.click_at(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }
}

/// Stdout belongs to the TUI, so logs go to a file under the cache dir.
/// The handle must stay alive for the lifetime of the process.
fn init_logging() -> Option<LoggerHandle> {
    let proj = ProjectDirs::from("com", "evcal", "evcal")?;
    let log_dir = proj.cache_dir().join("logs");
    flexi_logger::Logger::try_with_env_or_str("info")
        .ok()?
        .log_to_file(FileSpec::default().directory(log_dir).basename("evcal"))
        .append()
        .start()
        .ok()
}
