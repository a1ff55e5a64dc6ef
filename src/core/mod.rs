//! Core domain types for the word game
//!
//! This module contains the pure pieces: validated words and the guess
//! evaluator. Nothing here holds game state or touches the terminal.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark, evaluate};
pub use word::{Word, WordError, normalize_letter};
