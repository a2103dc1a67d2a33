//! melee_tui - Interactive TUI for inspecting melee damage resolution

mod app;
mod simulation;
mod ui;

use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use melee_core::{load_tuning, ConfigError, DamageCalculator};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE: &str = "melee_tui.log";
const EXPORT_FILE: &str = "breakdown.json";

/// Startup or terminal failure
#[derive(Error, Debug)]
enum TuiError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to load tuning from {path}: {source}")]
    Tuning { path: String, source: ConfigError },
}

/// Log to a file; the terminal belongs to the UI
fn init_logging() -> io::Result<()> {
    let file = File::create(LOG_FILE)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("melee_core=debug,melee_tui=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}

/// Calculator from the tuning file given on the command line, or the defaults
fn load_calculator() -> Result<(DamageCalculator, String), TuiError> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok((DamageCalculator::default(), "built-in defaults".to_string()));
    };

    match load_tuning(Path::new(&path)) {
        Ok(tuning) => Ok((DamageCalculator::new(tuning), path)),
        Err(source) => {
            error!(path = %path, error = %source, "failed to load tuning");
            Err(TuiError::Tuning { path, source })
        }
    }
}

fn main() -> Result<(), TuiError> {
    init_logging()?;
    let (calculator, source) = load_calculator()?;
    info!(tuning = %source, "starting melee_tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(calculator, source);

    // Main loop
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Char('4'), _) => app.set_tab(3),
                    (KeyCode::Char('5'), _) => app.set_tab(4),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.prev_scenario(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.next_scenario(),
                    (KeyCode::Char(','), _) => app.rotate(false),
                    (KeyCode::Char('.'), _) => app.rotate(true),
                    (KeyCode::Char('a'), _) | (KeyCode::Char(' '), _) | (KeyCode::Enter, _) => app.attack(),
                    (KeyCode::Char('s'), _) => app.simulate(),
                    (KeyCode::Char('c'), _) => app.toggle_creative(),
                    (KeyCode::Char('v'), _) => app.toggle_sampling(),
                    (KeyCode::Char('x'), _) => app.export_breakdown(EXPORT_FILE),
                    (KeyCode::Char('r'), _) => app.reset(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    _ => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    info!("melee_tui shutdown");
    Ok(())
}
