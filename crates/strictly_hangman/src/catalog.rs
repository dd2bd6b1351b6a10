//! Word catalog: `topic:word` entries loaded from a flat text file.

use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Maximum number of characters kept from a topic or a word.
///
/// Longer fields are truncated, never rejected.
pub const MAX_FIELD_LEN: usize = 127;

/// Maximum number of entries kept from a word list. Later lines are ignored.
pub const MAX_ENTRIES: usize = 500;

/// One playable word and the topic shown as a hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct WordEntry {
    /// Hint shown above the word grid.
    topic: String,
    /// The word as written in the source (casing is normalized by the game).
    word: String,
}

/// Error loading a word list.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    /// The word list could not be read.
    #[display("Failed to read word list {}: {}", path, message)]
    Read {
        /// Path that was opened.
        path: String,
        /// Underlying I/O error text.
        message: String,
    },

    /// The source yielded no `topic:word` entries.
    #[display("Word list contains no entries")]
    Empty,
}

/// Ordered, non-empty list of word entries.
///
/// Entries keep file order and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCatalog {
    entries: Vec<WordEntry>,
}

impl WordCatalog {
    /// Creates a catalog from entries, rejecting an empty list.
    #[instrument(skip(entries), fields(count = entries.len()))]
    pub fn from_entries(entries: Vec<WordEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    /// Built-in two-entry list used when no word list is available.
    #[instrument]
    pub fn fallback() -> Self {
        Self {
            entries: vec![
                WordEntry::new("Fruits".to_string(), "banana".to_string()),
                WordEntry::new("Country".to_string(), "bangladesh".to_string()),
            ],
        }
    }

    /// Parses `topic:word` lines.
    ///
    /// Each line is cut at its first `\r` or `\n`. Empty lines and lines
    /// without a `:` are skipped; the first `:` separates topic from word.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut entries = Vec::new();

        for raw in text.split('\n') {
            let line = raw.split('\r').next().unwrap_or_default();
            if line.is_empty() {
                continue;
            }

            let Some((topic, word)) = line.split_once(':') else {
                debug!(line, "Skipping line without separator");
                continue;
            };

            if entries.len() == MAX_ENTRIES {
                warn!(max = MAX_ENTRIES, "Word list truncated at entry limit");
                break;
            }

            entries.push(WordEntry::new(truncate_field(topic), truncate_field(word)));
        }

        debug!(count = entries.len(), "Parsed word list");
        Self::from_entries(entries)
    }

    /// Loads and parses a word list file.
    ///
    /// Lines that are not valid UTF-8 are skipped; the rest of the file
    /// still loads.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| CatalogError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let catalog = Self::parse(&decode_lines(&bytes))?;
        info!(count = catalog.len(), "Word list loaded");
        Ok(catalog)
    }

    /// Loads a word list, substituting [`WordCatalog::fallback`] on any failure.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_fallback(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "Using built-in word list");
                Self::fallback()
            }
        }
    }

    /// Picks one entry uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &WordEntry {
        &self.entries[rng.random_range(0..self.entries.len())]
    }

    /// Returns the entries in source order.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Number of entries (always at least one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Keeps at most [`MAX_FIELD_LEN`] characters.
fn truncate_field(field: &str) -> String {
    field.chars().take(MAX_FIELD_LEN).collect()
}

/// Keeps the lines of `bytes` that decode as UTF-8, newline-separated.
fn decode_lines(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for (number, line) in bytes.split(|b| *b == b'\n').enumerate() {
        match std::str::from_utf8(line) {
            Ok(line) => {
                text.push_str(line);
                text.push('\n');
            }
            Err(e) => warn!(line = number + 1, error = %e, "Skipping line that is not UTF-8"),
        }
    }
    text
}
