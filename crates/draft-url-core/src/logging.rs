//! Logging init: diagnostics go to stderr so stdout carries only the annotation.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Install a stderr fmt subscriber filtered by `RUST_LOG`.
/// Returns Err if a global subscriber is already set; the caller may carry on without one.
pub fn init_logging() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {e}"))?;

    tracing::debug!("draft-url logging initialized");

    Ok(())
}
