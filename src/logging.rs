//! Diagnostic output on stderr.
//!
//! Report text goes to stdout; everything emitted through `tracing` (the
//! journald notice, detection fallback, skipped lines) goes to stderr so the
//! two never interleave in a pipe.

use std::io;

use tracing::Level;

/// Install the global subscriber. `verbose` lowers the threshold to DEBUG.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(false)
        .try_init();
}
