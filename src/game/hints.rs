//! Best-known verdict per letter, for keyboard displays

use crate::core::{Feedback, Mark, Word};
use rustc_hash::FxHashMap;

/// Strongest mark seen for each guessed letter
///
/// `Correct` beats `Present` beats `Absent`, so a letter that was once green
/// stays green even if a later guess places it wrongly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    best: FxHashMap<u8, Mark>,
}

impl LetterHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the hints
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &mark) in guess.letters().iter().zip(feedback.marks()) {
            self.best
                .entry(letter)
                .and_modify(|known| *known = (*known).max(mark))
                .or_insert(mark);
        }
    }

    /// Best mark for `letter`, or `None` if it was never guessed
    ///
    /// Lowercase letters are looked up as uppercase.
    #[must_use]
    pub fn hint(&self, letter: char) -> Option<Mark> {
        crate::core::normalize_letter(letter).and_then(|l| self.best.get(&l).copied())
    }

    /// Letters with the given mark, alphabetically
    #[must_use]
    pub fn letters_with(&self, mark: Mark) -> Vec<char> {
        let mut letters: Vec<char> = self
            .best
            .iter()
            .filter(|&(_, &m)| m == mark)
            .map(|(&l, _)| char::from(l))
            .collect();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
