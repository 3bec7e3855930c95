//! Logging setup shared by the server and CLI binaries.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. `format` is `text` or
/// `json` (anything else falls back to text).
///
/// # Errors
///
/// Returns an error if `default_level` is not a valid filter directive or a
/// subscriber is already installed.
pub fn init(default_level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid log level")?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if format == "json" {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
