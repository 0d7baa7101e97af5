//! Word sources for the game
//!
//! The embedded lists ship in the binary; a two-record text file can
//! replace them at startup.

mod embedded;
pub mod loader;
mod store;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, SECRETS, SECRETS_COUNT};
pub use store::{WordStore, WordStoreError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_count_matches_const() {
        assert_eq!(SECRETS.len(), SECRETS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn secrets_are_valid_words() {
        // All secret candidates should be 5 letters, uppercase
        for &word in SECRETS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_valid() {
        for &word in DICTIONARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn secrets_subset_of_dictionary() {
        // The shipped dictionary should already contain every secret; the
        // store guard would cover a gap, but the data ought to be right.
        let dictionary_set: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for &secret in SECRETS {
            assert!(
                dictionary_set.contains(&secret),
                "Secret '{secret}' not in dictionary"
            );
        }
    }
}
