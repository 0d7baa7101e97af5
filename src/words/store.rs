//! Word store: the secret-candidate pool and the guess dictionary

use crate::core::{Word, WordError};
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Owns the secret-candidate pool and the set of acceptable guesses
///
/// Both are loaded once and immutable afterwards. Every secret candidate
/// is guaranteed to be an acceptable guess, whatever the dictionary
/// record says.
#[derive(Debug, Clone)]
pub struct WordStore {
    secrets: Vec<Word>,
    dictionary: FxHashSet<Word>,
}

/// Loading-time contract violations in a word source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordStoreError {
    MissingRecord(&'static str),
    EmptyRecord(&'static str),
    InvalidWord { word: String, source: WordError },
}

impl fmt::Display for WordStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRecord(record) => {
                write!(f, "Word source is missing the {record} record")
            }
            Self::EmptyRecord(record) => write!(f, "Word source has an empty {record} record"),
            Self::InvalidWord { word, source } => {
                write!(f, "Invalid word {word:?} in word source: {source}")
            }
        }
    }
}

impl std::error::Error for WordStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord { source, .. } => Some(source),
            Self::MissingRecord(_) | Self::EmptyRecord(_) => None,
        }
    }
}

impl WordStore {
    /// Build a store from the two whitespace-separated records of a word
    /// source
    ///
    /// # Errors
    /// Returns `WordStoreError` if either record is empty or holds a
    /// malformed word.
    pub fn from_records(
        secret_record: &str,
        dictionary_record: &str,
    ) -> Result<Self, WordStoreError> {
        let secrets = parse_words(secret_record.split_whitespace())?;
        let dictionary = parse_words(dictionary_record.split_whitespace())?;
        Self::build(secrets, dictionary)
    }

    /// Build a store from the embedded word lists
    ///
    /// # Errors
    /// Returns `WordStoreError` if the shipped lists are malformed, which
    /// would be a build defect.
    pub fn embedded() -> Result<Self, WordStoreError> {
        Self::from_slices(super::SECRETS, super::DICTIONARY)
    }

    /// Build a store from string slices
    ///
    /// # Errors
    /// Returns `WordStoreError` if either slice is empty or holds a
    /// malformed word.
    pub fn from_slices(secrets: &[&str], dictionary: &[&str]) -> Result<Self, WordStoreError> {
        let secrets = parse_words(secrets.iter().copied())?;
        let dictionary = parse_words(dictionary.iter().copied())?;
        Self::build(secrets, dictionary)
    }

    fn build(secrets: Vec<Word>, dictionary: Vec<Word>) -> Result<Self, WordStoreError> {
        if secrets.is_empty() {
            return Err(WordStoreError::EmptyRecord("secret pool"));
        }
        if dictionary.is_empty() {
            return Err(WordStoreError::EmptyRecord("dictionary"));
        }

        let mut dictionary: FxHashSet<Word> = dictionary.into_iter().collect();

        // The secret must always be a submittable guess, so the pool is
        // unioned into the dictionary.
        dictionary.extend(secrets.iter().cloned());

        Ok(Self {
            secrets,
            dictionary,
        })
    }

    /// Choose a secret word uniformly at random
    ///
    /// # Panics
    /// Will not panic - construction rejects an empty secret pool.
    #[must_use]
    pub fn pick_secret(&self) -> &Word {
        self.secrets
            .choose(&mut rand::rng())
            .expect("secret pool is never empty")
    }

    /// Check whether a word is an acceptable guess
    #[inline]
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }

    /// Number of secret candidates
    #[must_use]
    pub fn secret_count(&self) -> usize {
        self.secrets.len()
    }

    /// Number of acceptable guesses
    #[must_use]
    pub fn dictionary_count(&self) -> usize {
        self.dictionary.len()
    }
}

fn parse_words<'a>(raw: impl Iterator<Item = &'a str>) -> Result<Vec<Word>, WordStoreError> {
    raw.map(|text| {
        Word::new(text).map_err(|source| WordStoreError::InvalidWord {
            word: text.to_string(),
            source,
        })
    })
    .collect()
}
