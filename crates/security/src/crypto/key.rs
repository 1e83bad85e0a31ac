//! [`KeyBytes`]: decoded AES-256 key material.

use common::SecurityError;
use zeroize::Zeroizing;

use crate::hex;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Fixed-size key buffer that holds exactly [`KEY_LEN`] bytes.
///
/// Rebuilt from the hex form on every low-level call. The bytes are zeroed
/// when the value is dropped.
#[derive(Clone)]
pub struct KeyBytes(Zeroizing<[u8; KEY_LEN]>);

impl KeyBytes {
    /// Decode a 64-character hex key (any case).
    ///
    /// # Errors
    ///
    /// Returns [`SecurityError::Format`] for malformed hex and
    /// [`SecurityError::Crypto`] if the decoded key is not [`KEY_LEN`] bytes.
    pub fn from_hex(key_hex: &str) -> Result<Self, SecurityError> {
        let raw = Zeroizing::new(hex::decode(key_hex)?);
        if raw.len() != KEY_LEN {
            return Err(SecurityError::Crypto(format!(
                "key must be {KEY_LEN} bytes ({} hex characters), got {} bytes",
                KEY_LEN * 2,
                raw.len()
            )));
        }
        let mut buf = Zeroizing::new([0u8; KEY_LEN]);
        buf.copy_from_slice(&raw);
        Ok(Self(buf))
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for KeyBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("KeyBytes([REDACTED])")
    }
}
