//! Final result printed to stdout
//!
//! Runs after the alternate screen is gone so the outcome and share grid
//! survive in the terminal scrollback.

use crate::core::MAX_TRIES;
use crate::share::{ClipboardError, GameSummary};
use colored::Colorize;

/// Print the result banner, share grid, and clipboard status
pub fn print_game_result(summary: &GameSummary, clipboard: &Result<(), ClipboardError>) {
    println!("\n{}", "─".repeat(40).cyan());

    if summary.won {
        println!(
            "{}",
            format!(
                "Guessed in {}/{MAX_TRIES} {}",
                summary.attempts_used,
                if summary.attempts_used == 1 {
                    "try"
                } else {
                    "tries"
                }
            )
            .green()
            .bold()
        );
    } else {
        println!("{}", format!("Word was {}", summary.secret).yellow().bold());
    }

    println!("\n{}", summary.share_text());

    match clipboard {
        Ok(()) => println!("\n{}", "Result copied to clipboard".blue()),
        Err(err) => println!("\n{}", format!("Could not copy result: {err}").yellow()),
    }

    println!("{}", "─".repeat(40).cyan());
}
