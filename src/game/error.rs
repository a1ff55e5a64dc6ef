//! Rejection reasons for session actions
//!
//! None of these are fatal. A rejected action leaves the session untouched and
//! the front end decides how to show the reason.

use super::SessionState;
use std::fmt;

/// Why an action was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The input itself is unusable (bad character, wrong guess length)
    InvalidInput(InvalidInput),
    /// The action would not change anything
    NoOpRequested(NoOp),
    /// The game is already over
    TerminalStateViolation(SessionState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    NotALetter(char),
    WrongLength { expected: usize, actual: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOp {
    AttemptFull,
    AttemptEmpty,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(InvalidInput::NotALetter(ch)) => {
                write!(f, "{ch:?} is not a letter")
            }
            Self::InvalidInput(InvalidInput::WrongLength { expected, .. }) => {
                write!(f, "Please enter exactly {expected} letters")
            }
            Self::NoOpRequested(NoOp::AttemptFull) => {
                write!(f, "No more letters fit in this guess")
            }
            Self::NoOpRequested(NoOp::AttemptEmpty) => write!(f, "Nothing to delete"),
            Self::TerminalStateViolation(state) => {
                write!(f, "The game is over ({state}); start a new game")
            }
        }
    }
}

impl std::error::Error for Rejection {}

impl From<InvalidInput> for Rejection {
    fn from(reason: InvalidInput) -> Self {
        Self::InvalidInput(reason)
    }
}

impl From<NoOp> for Rejection {
    fn from(reason: NoOp) -> Self {
        Self::NoOpRequested(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let wrong = Rejection::from(InvalidInput::WrongLength {
            expected: 5,
            actual: 3,
        });
        assert_eq!(wrong.to_string(), "Please enter exactly 5 letters");
        assert_eq!(
            Rejection::from(NoOp::AttemptEmpty).to_string(),
            "Nothing to delete"
        );
        assert_eq!(
            Rejection::TerminalStateViolation(SessionState::Won).to_string(),
            "The game is over (won); start a new game"
        );
    }
}
