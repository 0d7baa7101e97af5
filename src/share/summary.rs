//! Shareable result summary
//!
//! Snapshot of a finished (or abandoned) game, and the colored-square
//! share text built from it.

use crate::core::{MAX_TRIES, Verdict, WORD_LEN};
use crate::game::{Game, GamePhase};

/// Outcome snapshot used for the share text and the final stdout report
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub won: bool,
    pub attempts_used: usize,
    pub secret: String,
    /// Verdicts of the finalized rows, top to bottom
    pub rows: Vec<[Verdict; WORD_LEN]>,
}

impl GameSummary {
    /// Snapshot a game's finalized rows
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        let finalized = game.board().finalized_rows();
        let rows = game.board().rows()[..finalized]
            .iter()
            .map(|row| {
                let mut verdicts = [Verdict::Unset; WORD_LEN];
                for (slot, cell) in verdicts.iter_mut().zip(row) {
                    *slot = cell.verdict();
                }
                verdicts
            })
            .collect();

        Self {
            won: game.phase() == GamePhase::Won,
            attempts_used: game.attempts_used(),
            secret: game.secret().text().to_string(),
            rows,
        }
    }

    /// Text offered to the clipboard sink
    ///
    /// Header line, blank line, then one emoji row per finalized attempt.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::Verdict;
    /// use wordle_tui::share::GameSummary;
    ///
    /// let summary = GameSummary {
    ///     won: true,
    ///     attempts_used: 1,
    ///     secret: "ERASE".to_string(),
    ///     rows: vec![[Verdict::Correct; 5]],
    /// };
    /// assert_eq!(summary.share_text(), "Wordle 1/6\n\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn share_text(&self) -> String {
        let grid = self
            .rows
            .iter()
            .map(|row| row.iter().map(|&v| verdict_glyph(v)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");

        format!("Wordle {}/{MAX_TRIES}\n\n{grid}", self.attempts_used)
    }
}

/// Colored-square glyph for one verdict
const fn verdict_glyph(verdict: Verdict) -> char {
    match verdict {
        Verdict::Correct => '🟩',
        Verdict::Present => '🟨',
        Verdict::Absent => '🟥',
        Verdict::Unset => '⬜',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::words::WordStore;

    fn play(secret: &str, guesses: &[&str]) -> Game {
        let store = WordStore::from_records(
            "ERASE CRANE",
            "ERASE CRANE SPEED SLATE STARE SPARE SCARE SHARE",
        )
        .unwrap();
        let mut game = Game::new(Word::new(secret).unwrap(), store);

        for guess in guesses {
            for c in guess.chars() {
                game.handle_letter(c);
            }
            game.resolve_row();
        }

        game
    }

    #[test]
    fn summary_of_win_in_two() {
        let game = play("ERASE", &["SPEED", "ERASE"]);
        let summary = GameSummary::from_game(&game);

        assert!(summary.won);
        assert_eq!(summary.attempts_used, 2);
        assert_eq!(summary.secret, "ERASE");
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[1], [Verdict::Correct; WORD_LEN]);
    }

    #[test]
    fn summary_share_text_grid_matches_rows() {
        let game = play("ERASE", &["SPEED", "ERASE"]);
        let text = GameSummary::from_game(&game).share_text();

        // SPEED vs ERASE: present, absent, present, present, absent
        assert_eq!(text, "Wordle 2/6\n\n🟨🟥🟨🟨🟥\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn summary_of_loss_discloses_secret() {
        let game = play("ERASE", &["SPEED"; 6]);
        let summary = GameSummary::from_game(&game);

        assert!(!summary.won);
        assert_eq!(summary.attempts_used, 6);
        assert_eq!(summary.secret, "ERASE");
        assert!(summary.share_text().starts_with("Wordle 6/6\n\n"));
    }

    #[test]
    fn summary_skips_rejected_rows() {
        // A rejected guess never becomes a finalized row
        let game = play("ERASE", &["QUEEN", "SPEED"]);
        let summary = GameSummary::from_game(&game);

        assert_eq!(summary.attempts_used, 1);
        assert_eq!(summary.rows.len(), 1);
    }
}
