//! Logging setup for the `dj` binary.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Maps the number of `-v` flags to a level.
///
/// No flag means INFO. Counting up from one walks from the most severe
/// level towards DEBUG: 1-2 ERROR, 3 WARN, 4 INFO, 5 or more DEBUG.
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::INFO,
        1 | 2 => Level::ERROR,
        3 => Level::WARN,
        4 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Installs a stderr subscriber. `RUST_LOG` directives are honored on top of
/// the level picked from `verbosity`.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(verbosity: u8) -> Result<(), TryInitError> {
    let level = level_for_verbosity(verbosity);
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let debug = level == Level::DEBUG;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(debug)
                .with_line_number(debug)
                .without_time(),
        )
        .with(filter)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_error() {
        let _ = init_logging(0);
        assert!(init_logging(5).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), Level::INFO);
        assert_eq!(level_for_verbosity(1), Level::ERROR);
        assert_eq!(level_for_verbosity(2), Level::ERROR);
        assert_eq!(level_for_verbosity(3), Level::WARN);
        assert_eq!(level_for_verbosity(4), Level::INFO);
        assert_eq!(level_for_verbosity(5), Level::DEBUG);
        assert_eq!(level_for_verbosity(9), Level::DEBUG);
    }
}
