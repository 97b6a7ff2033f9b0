//! Logging initialization
//!
//! Diagnostics go to stderr so the printed object on stdout stays exact.

use std::io;

/// Install a `fmt` subscriber filtered at `level`.
pub fn init(level: tracing::Level) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(true)
        .init();
}
