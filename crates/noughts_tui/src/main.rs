//! Noughts - terminal tic-tac-toe

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::SeededRandom;
use noughts_tui::{App, Cli, TuiConfig};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tracing::{error, info};

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TuiConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?
        .with_overrides(cli.mode.map(Into::into), cli.seed, cli.log_file);

    init_tracing(config.log_file())?;

    let rng = match config.seed() {
        Some(seed) => SeededRandom::new(*seed),
        None => SeededRandom::from_random(),
    };
    info!(mode = %config.mode(), seed = rng.seed(), "Starting noughts");

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let mut app = App::new(*config.mode(), rng);
    let res = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res.context("Game loop failed")
}

/// Setup logging to file to avoid interfering with the TUI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Creating log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Term) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()
}

/// Draw, then block on the next event. Each event is fully handled before
/// the next frame.
fn run_app(terminal: &mut Term, app: &mut App) -> io::Result<()> {
    loop {
        let area = terminal.draw(|f| noughts_tui::draw(f, app))?.area;
        app.set_viewport(area);

        if app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}
