//! Hex codec for key material.
//!
//! Decoding is case-insensitive: `"AB"` and `"ab"` yield the same byte.

use common::SecurityError;

/// Decode a hex string into raw bytes.
///
/// # Errors
///
/// Returns [`SecurityError::Format`] if the string has odd length or contains
/// a character outside `[0-9a-fA-F]`. The offending character is not echoed
/// back, since the input is usually key material.
pub fn decode(hex: &str) -> Result<Vec<u8>, SecurityError> {
    ::hex::decode(hex).map_err(|e| match e {
        ::hex::FromHexError::OddLength => {
            SecurityError::Format(format!("hex string has odd length {}", hex.len()))
        }
        ::hex::FromHexError::InvalidHexCharacter { index, .. } => {
            SecurityError::Format(format!("invalid hex character at position {index}"))
        }
        other => SecurityError::Format(other.to_string()),
    })
}

/// Encode raw bytes as lowercase hex.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    ::hex::encode(bytes)
}
