//! Game state machine
//!
//! Orchestrates input, evaluation, and board/keyboard updates. The machine
//! is explicit state owned by a single `Game` instance; rendering and
//! input collaborators borrow it read-only.

use super::board::{Board, BoardError};
use super::keyboard::Keyboard;
use crate::core::{MAX_TRIES, Word, evaluate};
use crate::words::WordStore;
use log::debug;

/// Where the machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// The active row has room for more letters
    AwaitingLetter,
    /// The active row is full and awaits resolution
    RowComplete,
    /// Terminal: the secret was guessed
    Won,
    /// Terminal: all attempts used without a correct guess
    LostExhausted,
}

/// What a single input or row resolution did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// State changed; redraw
    Updated,
    /// Input ignored: non-letter, full row, empty row, or terminal phase
    Ignored,
    /// Submitted guess is not in the dictionary; the row was cleared and
    /// the attempt preserved
    NotInDictionary(String),
    /// Row accepted and graded; the game continues on the next row
    RowScored,
    /// Row accepted, all letters correct
    Won,
    /// Row accepted, attempts exhausted
    Lost,
}

/// A single game: board, keyboard, secret, and dictionary
pub struct Game {
    board: Board,
    keyboard: Keyboard,
    secret: Word,
    store: WordStore,
    phase: GamePhase,
}

impl Game {
    /// Start a game with a fixed secret
    #[must_use]
    pub fn new(secret: Word, store: WordStore) -> Self {
        Self {
            board: Board::new(),
            keyboard: Keyboard::new(),
            secret,
            store,
            phase: GamePhase::AwaitingLetter,
        }
    }

    /// Start a game with a secret chosen uniformly from the store's pool
    #[must_use]
    pub fn with_random_secret(store: WordStore) -> Self {
        let secret = store.pick_secret().clone();
        debug!("secret chosen from a pool of {}", store.secret_count());
        Self::new(secret, store)
    }

    /// Feed one letter keystroke into the machine
    ///
    /// Non-alphabetic input and typing past the row end are ignored. The
    /// letter is normalized to uppercase. Filling the row moves the
    /// machine to `RowComplete`.
    pub fn handle_letter(&mut self, letter: char) -> GameEvent {
        if self.phase != GamePhase::AwaitingLetter || !letter.is_ascii_alphabetic() {
            return GameEvent::Ignored;
        }

        match self.board.place_letter(letter.to_ascii_uppercase()) {
            Ok(()) => {
                if self.board.is_row_full() {
                    self.phase = GamePhase::RowComplete;
                }
                GameEvent::Updated
            }
            Err(BoardError::RowFull | BoardError::RowEmpty) => GameEvent::Ignored,
        }
    }

    /// Feed a backspace keystroke into the machine
    ///
    /// Backspacing an empty row is ignored with no state change.
    pub fn handle_backspace(&mut self) -> GameEvent {
        if self.phase != GamePhase::AwaitingLetter {
            return GameEvent::Ignored;
        }

        match self.board.remove_last_letter() {
            Ok(()) => GameEvent::Updated,
            Err(BoardError::RowFull | BoardError::RowEmpty) => GameEvent::Ignored,
        }
    }

    /// Resolve a completed row against the dictionary
    ///
    /// A dictionary miss clears the row and returns to `AwaitingLetter`
    /// without consuming the attempt. A hit runs the evaluator, finalizes
    /// the row, updates the keyboard, and moves to `Won`,
    /// `LostExhausted`, or the next row.
    ///
    /// # Panics
    /// Will not panic - a complete row always holds five letters.
    pub fn resolve_row(&mut self) -> GameEvent {
        if self.phase != GamePhase::RowComplete {
            return GameEvent::Ignored;
        }

        let text = self.board.current_row_text();
        let guess = Word::new(&text).expect("complete row holds five letters");

        if !self.store.is_allowed(&guess) {
            self.board.clear_current_row();
            self.phase = GamePhase::AwaitingLetter;
            debug!("rejected guess {text}: not in dictionary");
            return GameEvent::NotInDictionary(text);
        }

        let verdicts = evaluate(&self.secret, &guess);
        let row_index = self.board.active_row_index();
        self.board.submit_current_row(&verdicts);
        self.keyboard.update(self.board.row(row_index));
        debug!("scored guess {text} on row {row_index}");

        if verdicts.iter().all(|v| v.is_correct()) {
            self.phase = GamePhase::Won;
            GameEvent::Won
        } else if row_index + 1 == MAX_TRIES {
            self.phase = GamePhase::LostExhausted;
            GameEvent::Lost
        } else {
            self.phase = GamePhase::AwaitingLetter;
            GameEvent::RowScored
        }
    }

    /// Current machine phase
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether the machine reached a terminal phase
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::Won | GamePhase::LostExhausted)
    }

    /// The board grid
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The keyboard verdict map
    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Number of attempts consumed so far
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.board.finalized_rows()
    }
}
