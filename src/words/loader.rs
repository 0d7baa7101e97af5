//! Word source loading
//!
//! A word source is a text file with two logical records: record 1 is the
//! whitespace-separated secret-candidate pool, record 2 the
//! whitespace-separated dictionary of acceptable guesses.

use super::{WordStore, WordStoreError};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a word store from a two-record file
///
/// # Errors
///
/// Returns an error if the file cannot be read, a record is missing, or a
/// word is malformed. All of these are loading-time contract violations.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordStore> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading word source {}", path.display()))?;

    Ok(parse(&content)?)
}

/// Parse word-source text into a store
///
/// # Errors
/// Returns `WordStoreError` if a record is missing, empty, or holds a
/// malformed word.
pub fn parse(content: &str) -> Result<WordStore, WordStoreError> {
    let mut records = content.lines();
    let secrets = records
        .next()
        .ok_or(WordStoreError::MissingRecord("secret pool"))?;
    let dictionary = records
        .next()
        .ok_or(WordStoreError::MissingRecord("dictionary"))?;

    WordStore::from_records(secrets, dictionary)
}
