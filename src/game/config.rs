//! Game configuration

use std::fmt;

/// Default word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of allowed attempts
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Fixed parameters of one game: word length L and attempt limit M
///
/// Only [`GameConfig::new`] and `Default` build one, so both values are
/// always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_attempts: usize,
}

/// Error type for invalid game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWordLength,
    ZeroAttempts,
    SecretLengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "Word length must be at least 1"),
            Self::ZeroAttempts => write!(f, "At least one attempt must be allowed"),
            Self::SecretLengthMismatch { expected, actual } => write!(
                f,
                "Secret has {actual} letters but the game expects {expected}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if either value is zero.
    pub const fn new(word_length: usize, max_attempts: usize) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(Self {
            word_length,
            max_attempts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic() {
        let config = GameConfig::default();
        assert_eq!(config.word_length(), 5);
        assert_eq!(config.max_attempts(), 6);
    }

    #[test]
    fn rejects_zero_values() {
        assert_eq!(GameConfig::new(0, 6), Err(ConfigError::ZeroWordLength));
        assert_eq!(GameConfig::new(5, 0), Err(ConfigError::ZeroAttempts));
        assert!(GameConfig::new(1, 1).is_ok());
    }

    #[test]
    fn accessors_return_validated_values() {
        let config = GameConfig::new(4, 9).unwrap();
        assert_eq!(config.word_length(), 4);
        assert_eq!(config.max_attempts(), 9);
    }
}
