//! Tests for loading word lists from disk.

use std::io::Write;

use strictly_hangman::{CatalogError, MAX_FIELD_LEN, WordCatalog};
use tempfile::NamedTempFile;

fn word_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_reads_entries_in_order() {
    let file = word_file("Fruits:apple\r\nCountry:norway\n\nbroken line\nAnimals:zebra");
    let catalog = WordCatalog::load(file.path()).unwrap();

    let pairs: Vec<_> = catalog
        .entries()
        .iter()
        .map(|e| (e.topic().as_str(), e.word().as_str()))
        .collect();
    assert_eq!(
        pairs,
        [("Fruits", "apple"), ("Country", "norway"), ("Animals", "zebra")]
    );
}

#[test]
fn test_load_keeps_entries_around_invalid_utf8_line() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"Fruits:apple\nCity:caf\xe9\nAnimals:owl\n").unwrap();
    file.flush().unwrap();

    let catalog = WordCatalog::load(file.path()).unwrap();
    let words: Vec<_> = catalog.entries().iter().map(|e| e.word().as_str()).collect();
    assert_eq!(words, ["apple", "owl"]);

    let catalog = WordCatalog::load_or_fallback(file.path());
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entries()[0].topic(), "Fruits");
}

#[test]
fn test_load_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = WordCatalog::load(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(CatalogError::Read { .. })));
}

#[test]
fn test_load_file_without_entries_is_empty_error() {
    let file = word_file("\n\nnothing useful\n");
    assert_eq!(WordCatalog::load(file.path()), Err(CatalogError::Empty));
}

#[test]
fn test_fallback_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = WordCatalog::load_or_fallback(dir.path().join("words.txt"));
    assert_eq!(catalog, WordCatalog::fallback());
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_fallback_on_empty_file() {
    let file = word_file("");
    assert_eq!(WordCatalog::load_or_fallback(file.path()), WordCatalog::fallback());
}

#[test]
fn test_load_or_fallback_prefers_file() {
    let file = word_file("Space:nebula\n");
    let catalog = WordCatalog::load_or_fallback(file.path());
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.entries()[0].word(), "nebula");
}

#[test]
fn test_long_fields_are_truncated_not_rejected() {
    let word = "a".repeat(300);
    let file = word_file(&format!("Long:{}\n", word));
    let catalog = WordCatalog::load(file.path()).unwrap();
    assert_eq!(catalog.entries()[0].word().len(), MAX_FIELD_LEN);
}

#[test]
fn test_error_messages() {
    let dir = tempfile::tempdir().unwrap();
    let err = WordCatalog::load(dir.path().join("gone.txt")).unwrap_err();
    assert!(err.to_string().contains("gone.txt"));
    assert_eq!(CatalogError::Empty.to_string(), "Word list contains no entries");
}
