//! Display functions for boards and results

use super::formatters::{colored_keyboard, colored_round, colored_tile, final_message, share_grid};
use crate::core::{Feedback, Mark, Word};
use crate::game::{Session, SessionState, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Write the board: submitted rounds, then the row being typed, then empty rows
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let config = session.config();
    let blank_row = || " _ ".repeat(config.word_length());

    for round in session.history() {
        writeln!(out, "  {}", colored_round(round))?;
    }

    let mut rows_left = session.remaining_attempts();
    if !session.is_over() && rows_left > 0 {
        let typed: String = session
            .attempt_text()
            .chars()
            .map(|ch| format!(" {ch} "))
            .collect();
        let missing = config.word_length().saturating_sub(session.attempt().len());
        writeln!(out, "  {typed}{}", " _ ".repeat(missing))?;
        rows_left -= 1;
    }
    for _ in 0..rows_left {
        writeln!(out, "  {}", blank_row().bright_black())?;
    }

    writeln!(out)?;
    for line in colored_keyboard(session.letter_hints()).lines() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

/// Write the end-of-game banner with the share grid
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_result<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let rule = "═".repeat(40);
    writeln!(out, "\n{}", rule.bright_cyan())?;
    let message = final_message(session);
    match session.state() {
        SessionState::Won => writeln!(out, "  {}", message.bright_green().bold())?,
        SessionState::Lost => writeln!(out, "  {}", message.red().bold())?,
        SessionState::InProgress => writeln!(out, "  {message}")?,
    }
    writeln!(out, "{}\n", rule.bright_cyan())?;
    writeln!(out, "{}\n", share_grid(session))
}

/// Write win/loss statistics for the run
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics:".bright_cyan().bold())?;
    writeln!(out, "   Played:          {}", stats.games_played)?;
    writeln!(out, "   Win rate:        {:.0}%", stats.win_rate())?;
    writeln!(out, "   Current streak:  {}", stats.current_streak)?;
    writeln!(out, "   Max streak:      {}", stats.max_streak)?;

    if stats.games_won > 0 {
        writeln!(out, "\n📈 {}", "Guess distribution:".bright_cyan().bold())?;
        let widest = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
        for (i, &count) in stats.guess_distribution.iter().enumerate() {
            let width = count * 30 / widest;
            writeln!(
                out,
                "   {}: {}{} {count}",
                i + 1,
                "█".repeat(width).green(),
                "░".repeat(30 - width).bright_black()
            )?;
        }
    }
    Ok(())
}

/// Write the feedback for a single guess
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_check_result<W: Write>(
    out: &mut W,
    guess: &Word,
    secret: &Word,
    feedback: &Feedback,
) -> io::Result<()> {
    let tiles: String = guess
        .letters()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| colored_tile(char::from(letter), Some(mark)).to_string())
        .collect();

    writeln!(out, "\n  {tiles}")?;
    writeln!(out, "  {}  {}", feedback.to_emoji(), feedback.to_string().bright_white())?;
    writeln!(
        out,
        "  {} correct, {} present, {} absent",
        feedback.count(Mark::Correct),
        feedback.count(Mark::Present),
        feedback.count(Mark::Absent)
    )?;
    if feedback.is_solved() {
        writeln!(out, "\n  {}", format!("{guess} is the secret").green().bold())
    } else {
        writeln!(
            out,
            "\n  {} against {}",
            guess.text().bright_yellow(),
            secret.text().bright_white()
        )
    }
}
