//! Output types written by the `sealctl` binary.
//!
//! Every invocation prints exactly one JSON object on stdout: either a
//! [`ValueResponse`] or an [`ErrorResponse`].

use serde::{Deserialize, Serialize};

use crate::error::SecurityError;

// ---------------------------------------------------------------------------
// Success
// ---------------------------------------------------------------------------

/// Successful result of a seal/open/lookup command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValueResponse {
    /// The Base64 package, recovered plaintext, or looked-up value.
    pub value: String,
}

impl ValueResponse {
    /// Wrap a value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Result of the `keygen` command: values ready to paste into `appsettings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeygenResponse {
    /// 64 lowercase hex characters.
    pub key: String,
    /// 12 printable ASCII characters.
    pub nonce: String,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error body printed on any failed command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"authentication_error"`).
    pub code: String,
    /// Human-readable description. Never contains key or plaintext material.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&SecurityError> for ErrorResponse {
    fn from(e: &SecurityError) -> Self {
        Self::new(e.code(), e.to_string())
    }
}
