//! Strictly Hangman binary.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_hangman::WordCatalog;
use strictly_hangman_tui::{App, Cli, HangmanConfig, init_tracing, run};
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = HangmanConfig::resolve(&cli).context("Failed to load configuration")?;

    init_tracing(config.log_file()).with_context(|| {
        format!("Failed to open log file {}", config.log_file().display())
    })?;
    info!(?config, "Configuration resolved");

    let catalog = WordCatalog::load_or_fallback(config.words_path());
    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    run(App::new(catalog, rng), config.frame_interval())
}
