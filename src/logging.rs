//! Diagnostic logging for the CLI
//!
//! Log lines go to stderr so they never mix with command results on stdout.

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Log level for a `-v` count, or nothing at all when quiet
#[must_use]
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber
pub fn setup_logging(verbosity: u8, quiet: bool) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer)
        .init();
}
