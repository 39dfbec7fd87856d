//! t20stats-tui binary entry point.
//!
//! Parses CLI arguments, loads the roster, and either runs a headless
//! subcommand or initializes the terminal in raw mode and runs the TUI
//! event loop, restoring the terminal state on exit.
//!
use crate::error::Result;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod error;
mod query;
mod roster;
mod ui;

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Set up tracing. The TUI owns the terminal, so interactive runs only log
/// when a log file is given; headless commands log to stderr.
fn init_tracing(log_file: Option<&std::path::Path>, headless: bool) -> Result<()> {
    let filter = EnvFilter::from_default_env();
    match log_file {
        Some(path) => {
            let file = Arc::new(std::fs::File::create(path)?);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(move || Arc::clone(&file))
                .with_ansi(false)
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

/// Program entry point: run a subcommand or the TUI, and report any top-level
/// error to stderr.
fn main() -> Result<()> {
    let args = cli::Cli::parse();
    init_tracing(args.log_file.as_deref(), args.command.is_some())?;

    let roster = match &args.data {
        Some(path) => roster::Roster::load(path)?,
        None => roster::Roster::bundled()?,
    };

    if let Some(command) = args.command {
        let page_size = args.page_size.unwrap_or(query::PAGE_SIZE).max(1);
        if let Err(err) = cli::run(&roster, command, page_size) {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
        return Ok(());
    }

    let theme = app::Theme::load_or_init(&args.theme);
    let defaults = app::queryconf::QueryDefaults::load_or_init("query.conf");
    let page_size = args.page_size.unwrap_or(defaults.page_size).max(1);
    let mut state = app::AppState::new(roster, page_size, theme);
    defaults.apply_to(&mut state);
    state.page_size = page_size;
    state.refresh();

    let mut terminal = init_terminal().map_err(|e| format!("init terminal: {}", e))?;

    let res = app::run(&mut terminal, state);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        eprintln!("application error: {err}");
    }
    Ok(())
}
