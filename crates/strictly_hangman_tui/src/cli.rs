//! Command-line interface for strictly_hangman.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Hangman - guess the word before the figure is complete
///
/// Every flag is optional; with none the game reads `words.txt` from the
/// working directory.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "strictly_hangman")]
#[command(about = "Single-screen hangman in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Word list with one `topic:word` entry per line
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Seed for word selection and pre-revealed letters
    #[arg(long)]
    pub seed: Option<u64>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
