//! Terminal output formatting
//!
//! Plain-stdout reporting used once the TUI has closed.

pub mod display;

pub use display::print_game_result;
