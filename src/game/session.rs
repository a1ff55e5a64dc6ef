//! Turn-based game session
//!
//! A `Session` owns everything about one game: the secret, the attempt being
//! typed, the submitted rounds and the derived state. Front ends drive it with
//! three actions and read it back through accessors; they never reach inside.
//!
//! # State Machine
//! `InProgress` → `Won` | `Lost`. Both end states are final: every action
//! afterwards is rejected with [`Rejection::TerminalStateViolation`].

use super::error::{InvalidInput, NoOp, Rejection};
use super::{ConfigError, GameConfig, LetterHints};
use crate::core::{Feedback, Word, evaluate, normalize_letter};
use log::{debug, info, trace};
use std::fmt;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        write!(f, "{text}")
    }
}

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Word,
    pub feedback: Feedback,
}

/// What an accepted action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    LetterAdded {
        letter: char,
        position: usize,
    },
    LetterDeleted {
        letter: char,
        position: usize,
    },
    GuessSubmitted {
        /// 1-based number of the round just played
        round: usize,
        feedback: Feedback,
        state: SessionState,
    },
}

/// Result of every session action
pub type ActionResult = Result<Outcome, Rejection>;

/// One game in progress or finished
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    secret: Word,
    attempt: Vec<u8>,
    history: Vec<Round>,
    state: SessionState,
    hints: LetterHints,
}

impl Session {
    /// Start a game with an explicit configuration
    ///
    /// # Errors
    /// Returns `ConfigError::SecretLengthMismatch` if the secret's length is
    /// not `config.word_length()`.
    ///
    /// # Examples
    /// ```
    /// use word_game::core::Word;
    /// use word_game::game::{GameConfig, Session, SessionState};
    ///
    /// let secret = Word::new("words").unwrap();
    /// let mut session = Session::new(secret, GameConfig::default()).unwrap();
    ///
    /// session.type_word("words").unwrap();
    /// session.submit_guess().unwrap();
    /// assert_eq!(session.state(), SessionState::Won);
    /// ```
    pub fn new(secret: Word, config: GameConfig) -> Result<Self, ConfigError> {
        if secret.len() != config.word_length() {
            return Err(ConfigError::SecretLengthMismatch {
                expected: config.word_length(),
                actual: secret.len(),
            });
        }

        debug!(
            "New session: {} letters, {} attempts",
            config.word_length(), config.max_attempts()
        );
        trace!("Secret: {secret}");

        Ok(Self {
            config,
            secret,
            attempt: Vec::with_capacity(config.word_length()),
            history: Vec::new(),
            state: SessionState::InProgress,
            hints: LetterHints::new(),
        })
    }

    /// Start a game whose word length is taken from the secret
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroAttempts` if `max_attempts` is zero.
    pub fn with_max_attempts(secret: Word, max_attempts: usize) -> Result<Self, ConfigError> {
        let config = GameConfig::new(secret.len(), max_attempts)?;
        Self::new(secret, config)
    }

    /// Throw this game away and start over with a new secret, same config
    ///
    /// # Errors
    /// Returns `ConfigError::SecretLengthMismatch` if the new secret does not
    /// fit the configured length. The current game is kept in that case.
    pub fn restart(&mut self, secret: Word) -> Result<(), ConfigError> {
        *self = Self::new(secret, self.config)?;
        Ok(())
    }

    /// Append a letter to the current attempt
    ///
    /// # Errors
    /// - `TerminalStateViolation` once the game is over
    /// - `InvalidInput(NotALetter)` for anything but an ASCII letter
    /// - `NoOpRequested(AttemptFull)` when the attempt already has L letters
    pub fn add_letter(&mut self, ch: char) -> ActionResult {
        self.ensure_in_progress()?;

        let Some(letter) = normalize_letter(ch) else {
            return self.reject(InvalidInput::NotALetter(ch).into());
        };
        if self.attempt.len() >= self.config.word_length() {
            return self.reject(NoOp::AttemptFull.into());
        }

        let position = self.attempt.len();
        self.attempt.push(letter);
        debug!("Added {} at position {position}", char::from(letter));

        Ok(Outcome::LetterAdded {
            letter: char::from(letter),
            position,
        })
    }

    /// Remove the last letter of the current attempt
    ///
    /// # Errors
    /// - `TerminalStateViolation` once the game is over
    /// - `NoOpRequested(AttemptEmpty)` when there is nothing to delete
    pub fn delete_letter(&mut self) -> ActionResult {
        self.ensure_in_progress()?;

        let Some(letter) = self.attempt.pop() else {
            return self.reject(NoOp::AttemptEmpty.into());
        };
        let position = self.attempt.len();
        debug!("Deleted {} from position {position}", char::from(letter));

        Ok(Outcome::LetterDeleted {
            letter: char::from(letter),
            position,
        })
    }

    /// Submit the current attempt as a guess
    ///
    /// On success the attempt is evaluated, recorded, and cleared. The game is
    /// won if the guess equals the secret; otherwise it is lost once all
    /// attempts are used. The win check comes first, so a correct final guess
    /// wins.
    ///
    /// # Errors
    /// - `TerminalStateViolation` once the game is over
    /// - `InvalidInput(WrongLength)` unless exactly L letters are typed
    pub fn submit_guess(&mut self) -> ActionResult {
        self.ensure_in_progress()?;

        if self.attempt.len() != self.config.word_length() {
            return self.reject(
                InvalidInput::WrongLength {
                    expected: self.config.word_length(),
                    actual: self.attempt.len(),
                }
                .into(),
            );
        }

        let guess = Word::from_letters(&self.attempt);
        let feedback = evaluate(&guess, &self.secret);
        debug!("Guess {guess} scored {feedback}");

        self.hints.record(&guess, &feedback);
        let solved = guess == self.secret;
        self.history.push(Round {
            guess,
            feedback: feedback.clone(),
        });
        self.attempt.clear();

        if solved {
            self.state = SessionState::Won;
        } else if self.history.len() >= self.config.max_attempts() {
            self.state = SessionState::Lost;
        }
        if self.state.is_terminal() {
            info!(
                "Game {} after {} of {} attempts",
                self.state,
                self.history.len(),
                self.config.max_attempts()
            );
        }

        Ok(Outcome::GuessSubmitted {
            round: self.history.len(),
            feedback,
            state: self.state,
        })
    }

    /// Type every character of `text` through [`Session::add_letter`]
    ///
    /// Stops at the first rejection. Letters typed before it stay in the
    /// attempt.
    ///
    /// # Errors
    /// The first rejection from `add_letter`.
    pub fn type_word(&mut self, text: &str) -> Result<(), Rejection> {
        for ch in text.chars() {
            self.add_letter(ch)?;
        }
        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), Rejection> {
        if self.state.is_terminal() {
            debug!("Rejected action: game already {}", self.state);
            return Err(Rejection::TerminalStateViolation(self.state));
        }
        Ok(())
    }

    fn reject(&self, rejection: Rejection) -> ActionResult {
        debug!("Rejected action in round {}: {rejection}", self.round() + 1);
        Err(rejection)
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// The secret word; front ends should only show it once the game is over
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Letters typed so far this round, uppercase
    #[inline]
    #[must_use]
    pub fn attempt(&self) -> &[u8] {
        &self.attempt
    }

    #[must_use]
    pub fn attempt_text(&self) -> String {
        self.attempt.iter().map(|&b| char::from(b)).collect()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Number of guesses submitted so far (0-based index of the row being typed)
    #[inline]
    #[must_use]
    pub fn round(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts().saturating_sub(self.history.len())
    }

    #[inline]
    #[must_use]
    pub const fn letter_hints(&self) -> &LetterHints {
        &self.hints
    }
}
