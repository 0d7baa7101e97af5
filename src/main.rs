//! Terminal Wordle - CLI
//!
//! Launches the game directly; six tries at a five-letter secret with
//! duplicate-aware feedback and a shareable result grid.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use wordle_tui::{
    game::Game,
    interactive::{App, run_tui},
    output::print_game_result,
    words::{WordStore, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Terminal Wordle with per-letter feedback and shareable results",
    version
)]
struct Cli {
    /// Word source file: line 1 is the secret pool, line 2 the guess
    /// dictionary (whitespace-separated 5-letter words)
    #[arg(short = 'w', long)]
    words: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    if let Err(err) = run() {
        // The terminal guard has already restored the screen by the time a
        // fault reaches here; the session still exits cleanly.
        log::error!("unexpected fault: {err:#}");
    }

    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let store = match &cli.words {
        Some(path) => load_from_file(path)
            .with_context(|| format!("loading word source {}", path.display()))?,
        None => WordStore::embedded()?,
    };

    let game = Game::with_random_secret(store);
    let app = App::new(game);

    if let Some((summary, clipboard)) = run_tui(app)? {
        print_game_result(&summary, &clipboard);
    }

    Ok(())
}
