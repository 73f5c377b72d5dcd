//! Logging initialization.
//!
//! Diagnostics use `tracing` and go to stderr so stdout stays a clean report.
//! `RUST_LOG` overrides the level chosen here.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber: INFO by default, DEBUG with `verbose`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
