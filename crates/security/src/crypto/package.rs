//! Packing of nonce, tag, and ciphertext into the Base64 wire format.
//!
//! ```text
//! offset 0         12              28
//!        | nonce(12) | tag(16)       | ciphertext(N) |
//! ```
//!
//! Field order and offsets are fixed; other implementations read this layout
//! byte for byte.

use std::{fmt, str::FromStr};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::SecurityError;

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of an AES-GCM authentication tag (16 bytes = 128 bits).
pub const TAG_LEN: usize = 16;

/// Smallest valid decoded package: nonce and tag with an empty ciphertext.
pub const MIN_PACKAGE_LEN: usize = NONCE_LEN + TAG_LEN;

/// A parsed encrypted value.
///
/// The string representation is standard padded Base64 of
/// `nonce ‖ tag ‖ ciphertext`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPackage {
    /// Raw nonce bytes.
    pub nonce: [u8; NONCE_LEN],
    /// Raw authentication tag bytes.
    pub tag: [u8; TAG_LEN],
    /// Raw ciphertext; same length as the plaintext.
    pub ciphertext: Vec<u8>,
}

impl EncryptedPackage {
    /// Concatenate the three fields in wire order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(MIN_PACKAGE_LEN + self.ciphertext.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Encode this package to its canonical Base64 text.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Split a decoded package into its fields.
    ///
    /// # Errors
    ///
    /// Returns [`SecurityError::Format`] if `bytes` is shorter than
    /// [`MIN_PACKAGE_LEN`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SecurityError> {
        if bytes.len() < MIN_PACKAGE_LEN {
            return Err(SecurityError::Format(format!(
                "encrypted package must be at least {MIN_PACKAGE_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let (nonce_bytes, rest) = bytes.split_at(NONCE_LEN);
        let (tag_bytes, ciphertext) = rest.split_at(TAG_LEN);

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(nonce_bytes);
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(tag_bytes);

        Ok(Self {
            nonce,
            tag,
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Parse Base64 text back into an [`EncryptedPackage`].
    ///
    /// # Errors
    ///
    /// Returns [`SecurityError::Format`] on invalid Base64 or a decoded length
    /// below [`MIN_PACKAGE_LEN`].
    pub fn from_base64(s: &str) -> Result<Self, SecurityError> {
        let bytes = STANDARD
            .decode(s)
            .map_err(|e| SecurityError::Format(format!("invalid base64 package: {e}")))?;
        Self::from_bytes(&bytes)
    }
}

impl fmt::Display for EncryptedPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl FromStr for EncryptedPackage {
    type Err = SecurityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base64(s)
    }
}
