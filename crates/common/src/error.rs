//! Common error types shared across crates.

use thiserror::Error;

/// Error taxonomy for every encryption and decryption operation.
///
/// Variants map to stable machine-readable codes returned to CLI callers:
/// - [`SecurityError::Format`] → `format_error`
/// - [`SecurityError::Crypto`] → `crypto_error`
/// - [`SecurityError::Authentication`] → `authentication_error`
/// - [`SecurityError::NullInput`] → `null_input`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SecurityError {
    /// Malformed hex key, malformed Base64, or an under-length package.
    #[error("format error: {0}")]
    Format(String),

    /// Key or nonce has the wrong byte length.
    #[error("crypto error: {0}")]
    Crypto(String),

    /// Tag verification failed: tampered data, wrong key, or wrong nonce.
    #[error("authentication failed: ciphertext or tag does not verify")]
    Authentication,

    /// A required argument was absent.
    #[error("missing required argument: {0}")]
    NullInput(&'static str),
}

impl SecurityError {
    /// Returns the machine-readable code reported for this error.
    pub fn code(&self) -> &'static str {
        match self {
            SecurityError::Format(_) => "format_error",
            SecurityError::Crypto(_) => "crypto_error",
            SecurityError::Authentication => "authentication_error",
            SecurityError::NullInput(_) => "null_input",
        }
    }

    /// Returns `true` for failures caused by data that does not verify.
    pub fn is_authentication(&self) -> bool {
        matches!(self, SecurityError::Authentication)
    }
}
