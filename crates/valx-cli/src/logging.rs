//! Stderr logging for the CLI.
//!
//! Stdout carries the envelope, so every log line goes to stderr. `RUST_LOG`
//! overrides the `--log-level` flag when it is set and parses.

use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

pub fn init(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();

    tracing::debug!(log_level = level.as_str(), "logging initialized");
}
