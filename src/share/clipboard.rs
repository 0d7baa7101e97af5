//! OSC 52 clipboard sink
//!
//! Copies the share text by emitting an OSC 52 escape sequence on the
//! controlling terminal, so the copy works locally, over SSH, and inside
//! tmux/GNU screen via DCS passthrough. When stdout is not a terminal the
//! copy is reported as unavailable; the game result is unaffected either
//! way.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::env;
use std::fmt;
use std::io::{self, IsTerminal, Write};

/// Clipboard errors; always soft failures at game end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    NotAvailable,
    WriteError(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "no terminal available for clipboard escape"),
            Self::WriteError(e) => write!(f, "clipboard write failed: {e}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// DCS passthrough mode for multiplexer environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Passthrough {
    /// Direct terminal access
    None,
    /// tmux DCS passthrough: `ESC P tmux; <ESC-doubled seq> ESC \`
    Tmux,
    /// GNU screen DCS passthrough: `ESC P <seq> ESC \`
    Screen,
}

fn detect_passthrough() -> Passthrough {
    if env::var_os("TMUX").is_some() {
        Passthrough::Tmux
    } else if env::var("TERM").is_ok_and(|term| term.starts_with("screen")) {
        Passthrough::Screen
    } else {
        Passthrough::None
    }
}

/// Build the escape sequence carrying `text` to the system clipboard
fn osc52_sequence(text: &str, passthrough: Passthrough) -> String {
    let payload = STANDARD.encode(text.as_bytes());
    let osc = format!("\x1b]52;c;{payload}\x07");

    match passthrough {
        Passthrough::None => osc,
        Passthrough::Tmux => {
            format!("\x1bPtmux;{}\x1b\\", osc.replace('\x1b', "\x1b\x1b"))
        }
        Passthrough::Screen => format!("\x1bP{osc}\x1b\\"),
    }
}

/// Copy `text` to the system clipboard of the hosting terminal
///
/// # Errors
/// Returns `ClipboardError::NotAvailable` when stdout is not a terminal,
/// or `ClipboardError::WriteError` if emitting the sequence fails.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut stdout = io::stdout();
    if !stdout.is_terminal() {
        return Err(ClipboardError::NotAvailable);
    }

    let sequence = osc52_sequence(text, detect_passthrough());
    stdout
        .write_all(sequence.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| ClipboardError::WriteError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_wraps_base64_payload() {
        let sequence = osc52_sequence("Wordle 2/6", Passthrough::None);

        assert!(sequence.starts_with("\x1b]52;c;"));
        assert!(sequence.ends_with('\x07'));

        let payload = &sequence["\x1b]52;c;".len()..sequence.len() - 1];
        assert_eq!(STANDARD.decode(payload).unwrap(), b"Wordle 2/6");
    }

    #[test]
    fn osc52_tmux_passthrough_doubles_escapes() {
        let sequence = osc52_sequence("hi", Passthrough::Tmux);

        assert!(sequence.starts_with("\x1bPtmux;\x1b\x1b]52;c;"));
        assert!(sequence.ends_with("\x1b\\"));
    }

    #[test]
    fn osc52_screen_passthrough_wraps_in_dcs() {
        let sequence = osc52_sequence("hi", Passthrough::Screen);

        assert!(sequence.starts_with("\x1bP\x1b]52;c;"));
        assert!(sequence.ends_with("\x07\x1b\\"));
    }

    #[test]
    fn osc52_empty_text_still_valid() {
        let sequence = osc52_sequence("", Passthrough::None);
        assert_eq!(sequence, "\x1b]52;c;\x07");
    }
}
