//! Word representation
//!
//! A `Word` is a non-empty sequence of uppercase ASCII letters. All comparison
//! in the game happens on `Word`s, so case normalization happens exactly once,
//! at construction.

use rustc_hash::FxHashMap;
use std::fmt;

/// A validated, uppercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidLength { expected: usize, actual: usize },
    InvalidCharacter { ch: char, position: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::InvalidCharacter { ch, position } => {
                write!(f, "Invalid character {ch:?} at position {position}")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Normalize a single input character to an uppercase ASCII letter
///
/// Returns `None` for anything that is not an ASCII letter.
///
/// # Examples
/// ```
/// use word_game::core::normalize_letter;
///
/// assert_eq!(normalize_letter('q'), Some(b'Q'));
/// assert_eq!(normalize_letter('Q'), Some(b'Q'));
/// assert_eq!(normalize_letter('7'), None);
/// assert_eq!(normalize_letter('é'), None);
/// ```
#[inline]
#[must_use]
pub const fn normalize_letter(ch: char) -> Option<u8> {
    if ch.is_ascii_alphabetic() {
        Some((ch as u8).to_ascii_uppercase())
    } else {
        None
    }
}

impl Word {
    /// Create a new Word of any non-zero length
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use word_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let raw = text.as_ref();
        if raw.is_empty() {
            return Err(WordError::Empty);
        }

        let mut normalized = String::with_capacity(raw.len());
        for (position, ch) in raw.chars().enumerate() {
            let letter = normalize_letter(ch).ok_or(WordError::InvalidCharacter { ch, position })?;
            normalized.push(char::from(letter));
        }

        Ok(Self { text: normalized })
    }

    /// Create a new Word that must be exactly `length` letters long
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// from [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Build a Word from letters already known to be uppercase ASCII
    pub(crate) fn from_letters(letters: &[u8]) -> Self {
        debug_assert!(!letters.is_empty());
        debug_assert!(letters.iter().all(u8::is_ascii_uppercase));
        Self {
            text: letters.iter().map(|&b| char::from(b)).collect(),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a `Word` cannot be empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Count how often each letter occurs
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
