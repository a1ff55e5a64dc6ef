//! Logger initialisation
//!
//! Diagnostics go through the `log` facade. `RUST_LOG` overrides the level
//! picked from the command line.

use env_logger::{Builder, Env};
use log::{LevelFilter, debug};

/// Map a `-v` count to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// Later calls keep the first logger and report through it.
pub fn init(verbosity: u8) {
    let default = level_for(verbosity).to_string().to_lowercase();
    if let Err(err) = Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init()
    {
        debug!("Logger already installed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(3);
    }
}
