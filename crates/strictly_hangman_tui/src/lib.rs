//! Terminal front end for Strictly Hangman.
//!
//! Owns the frame loop: each frame the screen layout is recomputed, the game
//! is drawn, queued input is drained, and at most one letter is applied.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, HangmanConfig};
pub use input::{FrameInput, poll_frame, resolve_letter};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

/// Sends log output to `log_file` so the game screen stays clean.
///
/// The filter comes from `RUST_LOG`, falling back to `info`.
pub fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Runs the game until the player quits, restoring the terminal afterwards.
#[instrument(skip(app))]
pub fn run(app: App, frame: Duration) -> Result<()> {
    info!("Starting Strictly Hangman");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, app, frame);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "Game loop failed");
    }
    info!("Strictly Hangman exited");
    res
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    frame: Duration,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.sync_layout(Rect::new(0, 0, size.width, size.height));
        terminal.draw(|f| ui::draw(f, &app))?;

        let input = poll_frame(frame)?;
        app.handle_frame(&input);
        if app.should_quit() {
            return Ok(());
        }
    }
}
