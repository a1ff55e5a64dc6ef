//! Terminal output formatting
//!
//! Display utilities for boards, results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{write_board, write_check_result, write_result, write_statistics};
pub use formatters::share_grid;
