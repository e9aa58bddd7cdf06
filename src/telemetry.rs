//! Tracing subscriber setup.
//!
//! Components log through `tracing` macros only. The subscriber installed here is
//! process-global; tests and embedders can scope their own with
//! [`tracing::subscriber::with_default`] instead of calling [`init`].

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// `RUST_LOG` directives take precedence; `log_level` is the fallback filter.
/// `log_format` selects between human-readable `text` and newline-delimited `json`.
///
/// # Errors
///
/// Returns an error if `log_level` is not a valid filter or a global subscriber is
/// already installed.
pub fn init(log_level: &str, log_format: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if log_format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
    }
}
