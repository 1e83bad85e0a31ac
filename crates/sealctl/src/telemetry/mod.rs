//! Telemetry initialisation for `sealctl`.
//!
//! Structured JSON logs go to stderr; stdout is reserved for the command's
//! JSON result.
//!
//! # Telemetry invariants
//!
//! - **No key, nonce, plaintext, or ciphertext** may appear in any log field.
//! - Log level comes from `RUST_LOG` if set, else `LOG_LEVEL` (default: `info`).

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise sealctl tracing subscriber: {e}"))
}
