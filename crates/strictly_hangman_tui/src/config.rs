//! Game configuration loaded from TOML and overridden from the command line.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Word list with one `topic:word` entry per line.
    #[serde(default = "default_words_path")]
    words_path: PathBuf,

    /// File receiving log output (the terminal itself is owned by the game).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Fixed seed for reproducible rounds; random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Milliseconds per frame.
    #[serde(default = "default_frame_millis")]
    frame_millis: u64,
}

#[instrument]
fn default_words_path() -> PathBuf {
    PathBuf::from("words.txt")
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_hangman.log")
}

#[instrument]
fn default_frame_millis() -> u64 {
    16
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            words_path: default_words_path(),
            log_file: default_log_file(),
            seed: None,
            frame_millis: default_frame_millis(),
        }
    }
}

impl HangmanConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.frame_millis == 0 {
            return Err(ConfigError::new("frame_millis must be at least 1".to_string()));
        }

        info!(words_path = %config.words_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Builds the effective configuration: the config file named on the
    /// command line (or defaults), then individual flag overrides.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(words) = &cli.words {
            self.words_path = words.clone();
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        self
    }

    /// Time budget of one frame.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_millis)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
