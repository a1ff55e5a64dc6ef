//! Word Game - CLI
//!
//! Wordle-style puzzle with a TUI mode, a simple line mode and a one-shot
//! checker.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use word_game::{
    commands::{check_guess, run_simple},
    core::Word,
    game::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig, Statistics},
    logging,
    output::{write_check_result, write_statistics},
    wordlists::{SECRETS, SecretPicker, loader},
};

#[derive(Parser)]
#[command(
    name = "word-game",
    about = "Guess the secret word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this secret instead of a random one
    #[arg(short, long, global = true)]
    secret: Option<String>,

    /// Number of guesses allowed (1-100)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS as u16,
        value_parser = clap::value_parser!(u16).range(1..=100)
    )]
    max_attempts: u16,

    /// Word length for random secrets (ignored with --secret)
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Newline-delimited file of secrets instead of the built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Seed for reproducible secret selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Show the feedback for one guess against a secret
    Check {
        /// The guessed word
        guess: String,

        /// The secret to compare against
        secret: String,
    },
}

/// Build the game configuration and the secret source from the CLI flags
fn setup(cli: &Cli) -> Result<(GameConfig, SecretPicker)> {
    if let Some(text) = &cli.secret {
        let secret = Word::new(text).with_context(|| format!("Invalid secret '{text}'"))?;
        let config = GameConfig::new(secret.len(), usize::from(cli.max_attempts))?;
        return Ok((config, SecretPicker::fixed(secret)));
    }

    let config = GameConfig::new(cli.length, usize::from(cli.max_attempts))?;
    let words = match &cli.wordlist {
        Some(path) => loader::load_from_file(path, config.word_length())?,
        None => loader::words_from_slice(SECRETS, config.word_length()),
    };
    let picker = SecretPicker::new(words, cli.seed)
        .with_context(|| format!("No {}-letter secrets to choose from", config.word_length()))?;
    info!("Choosing secrets from {} words", picker.len());

    Ok((config, picker))
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    logging::init(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Check { guess, secret } => {
            let (guess, secret, feedback) = check_guess(&guess, &secret)?;
            write_check_result(&mut io::stdout(), &guess, &secret, &feedback)?;
            Ok(())
        }
        Commands::Simple => {
            let (config, mut picker) = setup(&cli)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let stats = run_simple(&mut picker, config, stdin.lock(), &mut stdout)?;
            print_statistics(&stats)
        }
        Commands::Play => {
            use word_game::interactive::{App, run_tui};

            let (config, picker) = setup(&cli)?;
            let app = App::new(picker, config)?;
            let stats = run_tui(app)?;
            print_statistics(&stats)
        }
    }
}

fn print_statistics(stats: &Statistics) -> Result<()> {
    if stats.games_played > 0 {
        write_statistics(&mut io::stdout(), stats)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn max_attempts_is_bounded() {
        assert!(Cli::try_parse_from(["word-game", "-m", "0"]).is_err());
        assert!(Cli::try_parse_from(["word-game", "-m", "40000"]).is_err());
        let cli = Cli::try_parse_from(["word-game", "simple", "-m", "100"]).unwrap();
        assert_eq!(cli.max_attempts, 100);
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["word-game"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(usize::from(cli.max_attempts), DEFAULT_MAX_ATTEMPTS);
        assert_eq!(cli.length, DEFAULT_WORD_LENGTH);
    }
}
