//! Interactive TUI mode
//!
//! Keys go into the session, the board is redrawn from its readers.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
