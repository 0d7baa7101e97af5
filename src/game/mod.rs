//! Game state: board, keyboard, and the turn state machine

mod board;
mod engine;
mod keyboard;

pub use board::{Board, BoardError, Cell};
pub use engine::{Game, GameEvent, GamePhase};
pub use keyboard::Keyboard;
