//! TUI application state and terminal lifecycle

use crate::game::{Game, GameEvent, GamePhase};
use crate::share::{ClipboardError, GameSummary, copy_to_clipboard};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const HINT_TEXT: &str = "Type your guess, Backspace to erase";

/// Which full-screen view is on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Help,
    Playing,
    Finished,
}

/// Status line shown under the board
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Hint,
    Error,
}

/// Application state
pub struct App {
    pub game: Game,
    pub screen: Screen,
    pub message: Message,
    pub outcome: Option<(GameSummary, Result<(), ClipboardError>)>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            screen: Screen::Title,
            message: Self::hint(),
            outcome: None,
            should_quit: false,
        }
    }

    fn hint() -> Message {
        Message {
            text: HINT_TEXT.to_string(),
            style: MessageStyle::Hint,
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Title => match code {
                KeyCode::Enter => self.screen = Screen::Help,
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Help => match code {
                KeyCode::Enter => self.screen = Screen::Playing,
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Playing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.on_letter(c),
                KeyCode::Backspace => {
                    // Silently ignored on an empty row
                    self.game.handle_backspace();
                }
                _ => {}
            },
            Screen::Finished => self.should_quit = true,
        }
    }

    fn on_letter(&mut self, letter: char) {
        if self.game.handle_letter(letter) == GameEvent::Ignored {
            return;
        }

        // A fresh keystroke clears any lingering rejection message
        self.message = Self::hint();

        // The fifth letter completes the row; resolve it immediately
        if self.game.phase() == GamePhase::RowComplete {
            match self.game.resolve_row() {
                GameEvent::NotInDictionary(word) => {
                    self.message = Message {
                        text: format!("\"{word}\" is Not in Word List"),
                        style: MessageStyle::Error,
                    };
                }
                GameEvent::Won | GameEvent::Lost => self.finish_game(),
                _ => {}
            }
        }
    }

    fn finish_game(&mut self) {
        let summary = GameSummary::from_game(&self.game);
        // Clipboard failure is reported on the finished screen, nothing more
        let clipboard = copy_to_clipboard(&summary.share_text());
        self.outcome = Some((summary, clipboard));
        self.screen = Screen::Finished;
    }
}

/// Scoped raw-mode and alternate-screen acquisition
///
/// Restoration happens in `Drop`, so every exit path, including panics
/// and faults unwinding out of the event loop, leaves the screen, cursor,
/// and input mode usable.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

/// Run the game TUI to completion
///
/// Returns the final summary and clipboard outcome, or `None` if the
/// player quit before the game ended.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Option<(GameSummary, Result<(), ClipboardError>)>> {
    let _guard = TerminalGuard::acquire()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, app)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<(GameSummary, Result<(), ClipboardError>)>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::words::WordStore;

    fn app(secret: &str) -> App {
        let store =
            WordStore::from_records("ERASE CRANE", "ERASE CRANE SPEED SLATE STARE").unwrap();
        App::new(Game::new(Word::new(secret).unwrap(), store))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    fn type_word(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn app_enter_walks_title_help_playing() {
        let mut a = app("ERASE");
        assert_eq!(a.screen, Screen::Title);

        press(&mut a, KeyCode::Enter);
        assert_eq!(a.screen, Screen::Help);

        press(&mut a, KeyCode::Enter);
        assert_eq!(a.screen, Screen::Playing);
    }

    #[test]
    fn app_esc_quits() {
        let mut a = app("ERASE");
        press(&mut a, KeyCode::Esc);
        assert!(a.should_quit);
    }

    #[test]
    fn app_ctrl_c_quits_everywhere() {
        let mut a = app("ERASE");
        a.screen = Screen::Playing;
        a.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(a.should_quit);
    }

    #[test]
    fn app_typing_fills_board() {
        let mut a = app("ERASE");
        a.screen = Screen::Playing;
        type_word(&mut a, "spe");

        assert_eq!(a.game.board().current_row_text(), "SPE");
    }

    #[test]
    fn app_rejected_word_surfaces_message() {
        let mut a = app("ERASE");
        a.screen = Screen::Playing;
        type_word(&mut a, "QUEEN");

        assert_eq!(a.message.style, MessageStyle::Error);
        assert!(a.message.text.contains("QUEEN"));
        assert_eq!(a.screen, Screen::Playing);
        assert_eq!(a.game.attempts_used(), 0);
    }

    #[test]
    fn app_message_resets_on_next_keystroke() {
        let mut a = app("ERASE");
        a.screen = Screen::Playing;
        type_word(&mut a, "QUEEN");
        assert_eq!(a.message.style, MessageStyle::Error);

        press(&mut a, KeyCode::Char('s'));
        assert_eq!(a.message.style, MessageStyle::Hint);
    }

    #[test]
    fn app_winning_guess_finishes_game() {
        let mut a = app("ERASE");
        a.screen = Screen::Playing;
        type_word(&mut a, "ERASE");

        assert_eq!(a.screen, Screen::Finished);
        let (summary, _clipboard) = a.outcome.as_ref().unwrap();
        assert!(summary.won);
        assert_eq!(summary.attempts_used, 1);
    }

    #[test]
    fn app_losing_game_finishes_with_secret() {
        let mut a = app("ERASE");
        a.screen = Screen::Playing;
        for _ in 0..6 {
            type_word(&mut a, "SPEED");
        }

        assert_eq!(a.screen, Screen::Finished);
        let (summary, _clipboard) = a.outcome.as_ref().unwrap();
        assert!(!summary.won);
        assert_eq!(summary.secret, "ERASE");
    }

    #[test]
    fn app_any_key_exits_finished_screen() {
        let mut a = app("ERASE");
        a.screen = Screen::Playing;
        type_word(&mut a, "ERASE");
        assert_eq!(a.screen, Screen::Finished);

        press(&mut a, KeyCode::Char('x'));
        assert!(a.should_quit);
    }

    #[test]
    fn app_quit_mid_game_leaves_no_outcome() {
        let mut a = app("ERASE");
        a.screen = Screen::Playing;
        type_word(&mut a, "SPEED");
        press(&mut a, KeyCode::Esc);

        assert!(a.should_quit);
        assert!(a.outcome.is_none());
    }
}
