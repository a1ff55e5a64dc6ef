//! Random secret selection

use crate::core::Word;
use anyhow::{Result, bail};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks secrets uniformly from a non-empty word list
pub struct SecretPicker {
    words: Vec<Word>,
    rng: StdRng,
}

impl SecretPicker {
    /// Create a picker; a `seed` makes the sequence of secrets reproducible
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty.
    pub fn new(words: Vec<Word>, seed: Option<u64>) -> Result<Self> {
        if words.is_empty() {
            bail!("No usable secret words available");
        }
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        debug!("Secret picker ready with {} words", words.len());
        Ok(Self { words, rng })
    }

    /// Picker that always returns the same word
    #[must_use]
    pub fn fixed(word: Word) -> Self {
        Self {
            words: vec![word],
            rng: StdRng::seed_from_u64(0),
        }
    }

    /// Draw the next secret
    pub fn next_secret(&mut self) -> Word {
        let index = self.rng.random_range(0..self.words.len());
        self.words[index].clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
