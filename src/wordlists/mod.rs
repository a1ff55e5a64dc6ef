//! Word lists for secret selection
//!
//! Provides the embedded secret list, a file loader and a random picker.

mod embedded;
pub mod loader;
mod picker;

pub use embedded::{SECRETS, SECRETS_COUNT};
pub use picker::SecretPicker;
