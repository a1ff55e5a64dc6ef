//! Simple line-oriented game mode
//!
//! Text-based play without the TUI. Each input line is one guess; it is typed
//! into the session letter by letter and then submitted. Input and output are
//! generic so the loop can be driven from tests.

use crate::game::{GameConfig, Outcome, Session, Statistics};
use crate::output::formatters::{colored_round, hint_summary};
use crate::output::{write_board, write_result};
use crate::wordlists::SecretPicker;
use anyhow::Result;
use log::info;
use std::io::{BufRead, Write};

enum Command {
    Quit,
    NewGame,
    Hint,
    Board,
    Guess(String),
}

fn parse_command(line: &str) -> Command {
    match line.to_lowercase().as_str() {
        ":quit" | ":q" | ":exit" => Command::Quit,
        ":new" | ":n" => Command::NewGame,
        ":hint" | ":h" => Command::Hint,
        ":board" | ":b" => Command::Board,
        _ => Command::Guess(line.to_string()),
    }
}

/// Run the simple interactive mode until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if a picked secret does not fit `config`.
pub fn run_simple<R: BufRead, W: Write>(
    picker: &mut SecretPicker,
    config: GameConfig,
    mut input: R,
    out: &mut W,
) -> Result<Statistics> {
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║          Word Game - Simple          ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        config.word_length(), config.max_attempts()
    )?;
    writeln!(out, "Commands: ':hint', ':board', ':new', ':quit'\n")?;

    let mut stats = Statistics::new();
    let mut session = Session::new(picker.next_secret(), config)?;

    loop {
        write!(out, "Guess {}/{}: ", session.round() + 1, config.max_attempts())?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(out)?;
            break;
        };
        if line.is_empty() {
            continue;
        }

        match parse_command(&line) {
            Command::Quit => break,
            Command::NewGame => {
                session.restart(picker.next_secret())?;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Command::Hint => writeln!(out, "{}", hint_summary(session.letter_hints()))?,
            Command::Board => write_board(out, &session)?,
            Command::Guess(word) => {
                if !play_guess(&mut session, &word, out)? {
                    continue;
                }
                write_result(out, &session)?;
                stats.record(&session);
                info!("Recorded game: {} played, {} won", stats.games_played, stats.games_won);

                write!(out, "Play again? (y/n): ")?;
                out.flush()?;
                match read_line(&mut input)?.as_deref().map(str::to_lowercase).as_deref() {
                    Some("y" | "yes") => {
                        session.restart(picker.next_secret())?;
                        writeln!(out, "\n🔄 New game started!\n")?;
                    }
                    _ => break,
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!")?;
    Ok(stats)
}

/// Type and submit one guess; returns true when the game has just ended
fn play_guess<W: Write>(session: &mut Session, word: &str, out: &mut W) -> Result<bool> {
    clear_attempt(session);

    if let Err(rejection) = session.type_word(word) {
        writeln!(out, "❌ {rejection}")?;
        clear_attempt(session);
        return Ok(false);
    }

    match session.submit_guess() {
        Ok(Outcome::GuessSubmitted {
            round, feedback, ..
        }) => {
            let last = &session.history()[round - 1];
            writeln!(out, "   {}  {}", colored_round(last), feedback.to_emoji())?;
            if !session.is_over() {
                writeln!(out, "   {} attempts left", session.remaining_attempts())?;
            }
            Ok(session.is_over())
        }
        Ok(_) => Ok(false),
        Err(rejection) => {
            writeln!(out, "❌ {rejection}")?;
            clear_attempt(session);
            Ok(false)
        }
    }
}

fn clear_attempt(session: &mut Session) {
    while session.delete_letter().is_ok() {}
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::io::Cursor;

    fn run(secret: &str, max_attempts: usize, script: &str) -> (Statistics, String) {
        let secret = Word::new(secret).unwrap();
        let config = GameConfig::new(secret.len(), max_attempts).unwrap();
        let mut picker = SecretPicker::fixed(secret);
        let mut out = Vec::new();
        let stats = run_simple(&mut picker, config, Cursor::new(script), &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn immediate_quit() {
        let (stats, text) = run("words", 6, ":quit\n");
        assert_eq!(stats.games_played, 0);
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_stops() {
        let (stats, _) = run("words", 6, "crane\n");
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn win_then_decline() {
        let (stats, text) = run("words", 6, "crane\nwords\nn\n");
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution, vec![0, 1]);
        assert!(text.contains("Word Game 2/6"));
    }

    #[test]
    fn loss_is_recorded() {
        let (stats, text) = run("words", 2, "crane\nslate\nn\n");
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
        assert!(text.contains("The word was WORDS"));
    }

    #[test]
    fn play_again() {
        let (stats, _) = run("words", 6, "words\ny\nwords\nno\n");
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn invalid_guesses_do_not_use_attempts() {
        let (stats, text) = run("words", 1, "wor\ncr4ne\ncranes\nwords\nn\n");
        assert_eq!(stats.games_won, 1);
        assert!(text.contains("Please enter exactly 5 letters"));
        assert!(text.contains("'4' is not a letter"));
        assert!(text.contains("No more letters fit in this guess"));
    }

    #[test]
    fn lowercase_and_whitespace_accepted() {
        let (stats, _) = run("words", 6, "   WoRdS  \nn\n");
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn hint_and_board_commands() {
        let (_, text) = run("slate", 6, "crane\n:hint\n:board\n:quit\n");
        assert!(text.contains("Correct: AE | Present: - | Absent: CNR"));
    }

    #[test]
    fn new_game_resets_round() {
        let (stats, text) = run("words", 6, "crane\n:new\nwords\nn\n");
        assert_eq!(stats.guess_distribution, vec![1]);
        assert!(text.contains("New game started"));
    }

    #[test]
    fn parse_commands() {
        assert!(matches!(parse_command(":Q"), Command::Quit));
        assert!(matches!(parse_command(":new"), Command::NewGame));
        assert!(matches!(parse_command(":hint"), Command::Hint));
        assert!(matches!(parse_command("crane"), Command::Guess(w) if w == "crane"));
    }
}
