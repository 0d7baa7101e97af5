//! Frame rendering
//!
//! Centered full-screen views drawn with ratatui: title banner,
//! instructions, the board with its keyboard, and the final result.

use super::app::{App, Message, MessageStyle, Screen};
use crate::core::Verdict;
use crate::game::{Board, Keyboard};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

// Palette
const GREEN: Color = Color::Rgb(0x62, 0xDE, 0x84);
const YELLOW: Color = Color::Rgb(0xFF, 0xCB, 0x6B);
const RED: Color = Color::Rgb(0xFF, 0x55, 0x72);
const GRAY: Color = Color::Rgb(0x67, 0x6E, 0x95);
const BLUE: Color = Color::Rgb(0x82, 0xAA, 0xFF);
const WHITE: Color = Color::Rgb(0xFF, 0xFE, 0xFE);
const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);

// Block-art WORDLE banner: '+' renders as frame, '-' as tile
const TITLE_ART: [&str; 9] = [
    "+++++++++++++++++++++++++++++++++++++++",
    "+-------------------------------------+",
    "+-+-+-+--+++--++++--++++--+-----+++++-+",
    "+-+-+-+-+---+-+---+-+---+-+-----+-----+",
    "+-+-+-+-+---+-+---+-+---+-+-----++++--+",
    "+-+-+-+-+---+-++++--+---+-+-----+-----+",
    "+--+++---+++--+---+-++++--+++++-+++++-+",
    "+-------------------------------------+",
    "+++++++++++++++++++++++++++++++++++++++",
];

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Title => render_title(f),
        Screen::Help => render_help(f),
        Screen::Playing => render_playing(f, app),
        Screen::Finished => render_finished(f, app),
    }
}

/// Tile style for one verdict
///
/// The verdict-to-color mapping is this single table.
fn tile_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => GREEN,
        Verdict::Present => YELLOW,
        Verdict::Absent => RED,
        Verdict::Unset => WHITE,
    };
    Style::default().fg(BLACK).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_title(f: &mut Frame) {
    let mut lines: Vec<Line> = Vec::new();

    for art_row in TITLE_ART {
        let spans: Vec<Span> = art_row
            .chars()
            .map(|c| {
                let bg = if c == '+' { GRAY } else { YELLOW };
                Span::styled(" ", Style::default().bg(bg))
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::styled(
        "Press Enter to Continue",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            "Reference: ",
            Style::default().fg(WHITE).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "www.powerlanguage.co.uk/wordle",
            Style::default().fg(BLUE),
        ),
    ]));

    render_centered(f, lines);
}

fn render_help(f: &mut Frame) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " HOW TO PLAY ",
            Style::default()
                .fg(BLACK)
                .bg(YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::raw("Guess the "),
            Span::styled("WORDLE", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" in 6 tries."),
        ]),
        Line::raw("After each guess, the color of the tiles will change"),
        Line::raw("to show how close your guess was to the word."),
        Line::default(),
    ];

    lines.push(example_row("WEARY", 0, GREEN));
    lines.push(Line::default());
    lines.push(Line::raw("The letter W is in the word and in the correct spot."));
    lines.push(Line::default());

    lines.push(example_row("PILOT", 2, YELLOW));
    lines.push(Line::default());
    lines.push(Line::raw("The letter L is in the word but in the wrong spot."));
    lines.push(Line::default());

    lines.push(example_row("VAGUE", 3, RED));
    lines.push(Line::default());
    lines.push(Line::raw("The letter U is not in the word in any spot."));
    lines.push(Line::default());

    lines.push(Line::styled(
        "Press Enter to Play",
        Style::default().add_modifier(Modifier::BOLD),
    ));

    render_centered(f, lines);
}

fn render_playing(f: &mut Frame, app: &App) {
    let mut lines = board_lines(app.game.board());
    lines.push(message_line(&app.message));
    lines.push(Line::default());
    lines.extend(keyboard_lines(app.game.keyboard()));

    render_centered(f, lines);
}

fn render_finished(f: &mut Frame, app: &App) {
    let mut lines = board_lines(app.game.board());

    if let Some((summary, clipboard)) = &app.outcome {
        if summary.won {
            lines.push(Line::styled(
                "Yay! Guessed Correctly",
                Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
            ));
        } else {
            lines.push(Line::styled(
                format!("Word was {}", summary.secret),
                Style::default().fg(YELLOW).add_modifier(Modifier::BOLD),
            ));
        }

        let clipboard_line = match clipboard {
            Ok(()) => Line::styled(
                "Wordle Copied to Clip-Board",
                Style::default().fg(BLUE).add_modifier(Modifier::BOLD),
            ),
            Err(_) => Line::styled(
                "Sorry! Unable to Copy Wordle",
                Style::default().fg(YELLOW).add_modifier(Modifier::BOLD),
            ),
        };
        lines.push(clipboard_line);
    }

    lines.push(Line::default());
    lines.extend(keyboard_lines(app.game.keyboard()));
    lines.push(Line::default());
    lines.push(Line::styled(
        "Press any Key to Exit",
        Style::default().fg(GRAY),
    ));

    render_centered(f, lines);
}

/// Board grid as styled lines, one blank line between rows
fn board_lines(board: &Board) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for row in board.rows() {
        let mut spans = Vec::new();
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let letter = cell.letter().unwrap_or(' ');
            spans.push(Span::styled(
                format!(" {letter} "),
                tile_style(cell.verdict()),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    lines
}

/// QWERTY keyboard as styled lines, colored by the best-known verdicts
fn keyboard_lines(keyboard: &Keyboard) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let mut spans = Vec::new();
        for (j, key) in row.chars().enumerate() {
            if j > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {key} "),
                tile_style(keyboard.verdict_for(key)),
            ));
        }
        lines.push(Line::from(spans));
    }

    lines
}

fn message_line(message: &Message) -> Line<'static> {
    let color = match message.style {
        MessageStyle::Hint => BLUE,
        MessageStyle::Error => RED,
    };
    Line::styled(
        message.text.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// One instruction-screen example word with a single highlighted tile
fn example_row(word: &str, highlight: usize, color: Color) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, letter) in word.chars().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let bg = if i == highlight { color } else { WHITE };
        spans.push(Span::styled(
            format!(" {letter} "),
            Style::default().fg(BLACK).bg(bg).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

/// Center `lines` vertically; each line centers itself horizontally
fn render_centered(f: &mut Frame, lines: Vec<Line>) {
    let height = lines.len() as u16;
    let area = vertical_center(f.area(), height);
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn vertical_center(area: Rect, height: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    chunks[1]
}
