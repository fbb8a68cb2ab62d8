//! Tracing subscriber setup for binaries and tests embedding the store.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Build the log filter.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `log_level`.
pub fn build_filter(log_level: &str) -> Result<EnvFilter> {
    if std::env::var("RUST_LOG").is_ok() {
        return Ok(EnvFilter::from_default_env());
    }
    EnvFilter::try_new(log_level).with_context(|| format!("invalid log level filter: {log_level}"))
}

/// Install the global tracing subscriber.
///
/// Fails instead of panicking when the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(log_level: &str) -> Result<()> {
    install(log_level, false)
}

/// Install the global tracing subscriber, writing through the test harness
/// so output is captured per test.
pub fn init_test_tracing(log_level: &str) -> Result<()> {
    install(log_level, true)
}

fn install(log_level: &str, test_writer: bool) -> Result<()> {
    let filter = build_filter(log_level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if test_writer {
        builder.with_test_writer().try_init()
    } else {
        builder.try_init()
    };
    installed
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}
