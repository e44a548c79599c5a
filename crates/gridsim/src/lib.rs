//! # gridsim
//!
//! Trace-driven front end for [`gridcache`]: reads a request trace, replays it
//! through a fresh grid and renders the final statistics as JSON.

#![warn(missing_docs)]

pub mod generate;
pub mod report;
pub mod trace;

/// Install the stderr log subscriber shared by the binaries
///
/// Level comes from `RUST_LOG`, defaulting to `warn` so stdout stays clean.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
