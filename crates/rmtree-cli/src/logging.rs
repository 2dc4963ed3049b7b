//! Tracing subscriber setup
//!
//! Diagnostics go to stderr so stdout carries only the rendered tree.
//! `RUST_LOG` takes precedence over `--log-level` when set.

use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// Build the filter from `RUST_LOG`, falling back to `level`
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.as_level().into()))
}

/// Install the global subscriber; later calls are no-ops
pub fn init(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
