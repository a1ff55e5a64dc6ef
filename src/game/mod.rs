//! Game session state machine and its supporting types

mod config;
mod error;
mod hints;
mod session;
mod stats;

pub use config::{ConfigError, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig};
pub use error::{InvalidInput, NoOp, Rejection};
pub use hints::LetterHints;
pub use session::{ActionResult, Outcome, Round, Session, SessionState};
pub use stats::Statistics;
