//! Logging setup for the CLI
//!
//! All output from `tracing` goes to stderr; stdout is reserved for command
//! results so `--json` output stays parseable.

use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Filter directive for a `-v` count combined with the configured verbosity.
///
/// The more verbose of the two wins.
pub fn log_filter(verbose: u8, verbosity: Verbosity) -> &'static str {
    const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

    let from_flags = match verbose {
        0 => 0,
        n => usize::from(n.min(3)) + 1,
    };
    let from_config = match verbosity {
        Verbosity::Quiet => 0,
        Verbosity::Normal => 1,
        Verbosity::Verbose => 2,
        Verbosity::Debug => 3,
    };
    LEVELS[from_flags.max(from_config)]
}

/// Install the global subscriber. `RUST_LOG` takes precedence when set.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init_logging(verbose: u8, verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbose, verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .try_init();

    tracing::trace!(args = ?std::env::args().collect::<Vec<_>>(), "logging initialized");
}
