//! Guess evaluation and feedback representation
//!
//! Feedback is one [`Mark`] per letter position:
//! - `Correct` = right letter, right position (green)
//! - `Present` = letter occurs elsewhere in the secret (yellow)
//! - `Absent`  = no unconsumed occurrence left in the secret (gray)

use super::Word;
use std::fmt;

/// Verdict for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for one submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Mark>);

impl Feedback {
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// Count positions carrying `mark`
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Render as an emoji row, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.code())?;
        }
        Ok(())
    }
}

/// Evaluate `guess` against `secret`
///
/// # Algorithm
/// 1. Exact pass: every position where the letters agree is `Correct`, and
///    that secret position is consumed.
/// 2. Presence pass: left to right over the remaining guess positions, the
///    first unconsumed secret position holding the same letter is consumed
///    and the guess position becomes `Present`.
/// 3. Everything else stays `Absent`.
///
/// Every secret letter is consumed at most once, which is what makes repeated
/// letters come out right.
///
/// # Panics
/// Panics if the two words differ in length. Callers must only evaluate
/// complete guesses.
///
/// # Examples
/// ```
/// use word_game::core::{Mark, Word, evaluate};
///
/// let guess = Word::new("crane").unwrap();
/// let secret = Word::new("slate").unwrap();
/// let feedback = evaluate(&guess, &secret);
///
/// assert_eq!(feedback.to_string(), "--G-G");
/// assert_eq!(feedback.count(Mark::Correct), 2);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, secret: &Word) -> Feedback {
    assert_eq!(
        guess.len(),
        secret.len(),
        "guess and secret must have the same length"
    );

    let guess = guess.letters();
    let secret = secret.letters();
    let mut marks = vec![Mark::Absent; guess.len()];
    let mut consumed = vec![false; secret.len()];

    // Exact matches
    for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            marks[i] = Mark::Correct;
            consumed[i] = true;
        }
    }

    // Misplaced letters, each secret position used at most once
    for (i, &g) in guess.iter().enumerate() {
        if marks[i] == Mark::Correct {
            continue;
        }
        let available = secret
            .iter()
            .zip(&consumed)
            .position(|(&s, &used)| !used && s == g);
        if let Some(j) = available {
            marks[i] = Mark::Present;
            consumed[j] = true;
        }
    }

    Feedback(marks)
}
