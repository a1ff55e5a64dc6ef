//! Word Game
//!
//! A Wordle-style word-guessing puzzle: a pure guess evaluator, a turn-based
//! game session, and terminal front ends built on top of them.
//!
//! # Quick Start
//!
//! ```rust
//! use word_game::core::Word;
//! use word_game::game::{Session, SessionState};
//!
//! let secret = Word::new("words").unwrap();
//! let mut session = Session::with_max_attempts(secret, 6).unwrap();
//!
//! session.type_word("sword").unwrap();
//! session.submit_guess().unwrap();
//! println!("{}", session.history()[0].feedback.to_emoji());
//! assert_eq!(session.state(), SessionState::InProgress);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostics
pub mod logging;
