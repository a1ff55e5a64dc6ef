//! Formatting utilities for terminal output

use crate::core::Mark;
use crate::game::{LetterHints, Round, Session, SessionState};
use colored::{ColoredString, Colorize};

/// Keyboard rows shown under the board
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Spoiler-free result grid, e.g. for pasting into a chat
///
/// ```text
/// Word Game 3/6
///
/// ⬜🟨⬜⬜🟩
/// 🟩⬜🟩🟨🟩
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_grid(session: &Session) -> String {
    let score = match session.state() {
        SessionState::Won => session.round().to_string(),
        SessionState::Lost => "X".to_string(),
        SessionState::InProgress => "?".to_string(),
    };

    let mut grid = format!(
        "Word Game {score}/{}\n",
        session.config().max_attempts()
    );
    for round in session.history() {
        grid.push('\n');
        grid.push_str(&round.feedback.to_emoji());
    }
    grid
}

/// One letter on a colored background
#[must_use]
pub fn colored_tile(letter: char, mark: Option<Mark>) -> ColoredString {
    let tile = format!(" {letter} ");
    match mark {
        Some(Mark::Correct) => tile.black().on_green().bold(),
        Some(Mark::Present) => tile.black().on_yellow().bold(),
        Some(Mark::Absent) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// A submitted round as colored tiles
#[must_use]
pub fn colored_round(round: &Round) -> String {
    round
        .guess
        .letters()
        .iter()
        .zip(round.feedback.marks())
        .map(|(&letter, &mark)| colored_tile(char::from(letter), Some(mark)).to_string())
        .collect()
}

/// On-screen keyboard with letters colored by their best known mark
#[must_use]
pub fn colored_keyboard(hints: &LetterHints) -> String {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .map(|ch| colored_tile(ch, hints.hint(ch)).to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary of the hints as plain text
#[must_use]
pub fn hint_summary(hints: &LetterHints) -> String {
    let list = |mark| -> String { hints.letters_with(mark).into_iter().collect() };
    format!(
        "Correct: {} | Present: {} | Absent: {}",
        or_dash(list(Mark::Correct)),
        or_dash(list(Mark::Present)),
        or_dash(list(Mark::Absent))
    )
}

fn or_dash(text: String) -> String {
    if text.is_empty() { "-".to_string() } else { text }
}

/// Message shown when a game ends
#[must_use]
pub fn final_message(session: &Session) -> String {
    match session.state() {
        SessionState::Won => {
            let rounds = session.round();
            let guesses = if rounds == 1 { "guess" } else { "guesses" };
            format!("Congratulations! You found {} in {rounds} {guesses}.", session.secret())
        }
        SessionState::Lost => format!(
            "Out of guesses. The word was {}. Better luck next time.",
            session.secret()
        ),
        SessionState::InProgress => format!(
            "{} attempts left.",
            session.remaining_attempts()
        ),
    }
}
