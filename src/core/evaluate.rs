//! Guess evaluation
//!
//! Grades a guess against the secret with the exact feedback rules,
//! including proper handling of duplicate letters.

use super::{Verdict, WORD_LEN, Word};

/// Grade `guess` against `secret`, one verdict per letter position
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct` and remove them
///    from the secret's letter pool.
/// 2. Second pass: over positions not already correct, mark `Present`
///    while the pool still holds the letter, otherwise `Absent`.
///
/// The pass order is what keeps repeated letters honest: crediting
/// `Present` greedily in a single pass would credit more copies of a
/// letter than the secret contains.
///
/// # Examples
/// ```
/// use wordle_tui::core::{Verdict, Word, evaluate};
///
/// let secret = Word::new("ERASE").unwrap();
/// let guess = Word::new("SPEED").unwrap();
///
/// let verdicts = evaluate(&secret, &guess);
/// assert_eq!(verdicts[0], Verdict::Present); // S
/// assert_eq!(verdicts[4], Verdict::Absent); // D
/// ```
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> [Verdict; WORD_LEN] {
    let mut verdicts = [Verdict::Absent; WORD_LEN];
    let mut remaining = secret.char_counts();

    // First pass: exact position matches
    // Allow: Index needed to access guess[i], secret[i], and set verdicts[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess.chars()[i] == secret.chars()[i] {
            verdicts[i] = Verdict::Correct;

            // Remove from the remaining pool
            let letter = guess.chars()[i];
            if let Some(count) = remaining.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters, bounded by what the secret still holds
    // Allow: Index needed to access guess[i] and check/set verdicts[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if !verdicts[i].is_correct() {
            let letter = guess.chars()[i];
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                verdicts[i] = Verdict::Present;
                *count -= 1;
            }
        }
    }

    verdicts
}
