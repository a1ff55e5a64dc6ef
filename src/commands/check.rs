//! One-shot guess check
//!
//! Evaluates a single guess against a given secret without running a game.

use crate::core::{Feedback, Word, evaluate};
use anyhow::{Context, Result, bail};

/// Validate both words and evaluate `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
///
/// # Examples
/// ```
/// use word_game::commands::check_guess;
///
/// let (_, _, feedback) = check_guess("speed", "erase").unwrap();
/// assert_eq!(feedback.to_string(), "Y-YY-");
/// ```
pub fn check_guess(guess: &str, secret: &str) -> Result<(Word, Word, Feedback)> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let secret = Word::new(secret).with_context(|| format!("Invalid secret '{secret}'"))?;

    if guess.len() != secret.len() {
        bail!(
            "Guess has {} letters but the secret has {}",
            guess.len(),
            secret.len()
        );
    }

    let feedback = evaluate(&guess, &secret);
    Ok((guess, secret, feedback))
}
