//! Action encryption: string encryption under one configured key/nonce pair.
//!
//! # Lifecycle
//!
//! 1. At startup, build an [`ActionCipher`] from the settings
//!    ([`ActionCipher::from_settings`]) and pass it by reference to callers.
//!    Code without such a handle uses [`shared`], which loads the pair from
//!    the settings exactly once per process.
//! 2. The pair is immutable afterwards.
//! 3. [`ActionCipher::encrypt`] and [`ActionCipher::decrypt`] treat `None`,
//!    empty, and whitespace-only input as a no-op returning `""`. Everything
//!    else is delegated to [`crate::crypto::cipher`] and its errors propagate
//!    unchanged.
//!
//! # Security invariants
//!
//! - **The same nonce is used for every value encrypted under one key.**
//!   Output is deterministic: equal plaintexts give equal packages. Under GCM
//!   this reveals the XOR of any two plaintexts of overlapping length and
//!   weakens tag forgery resistance. Only use action encryption for
//!   low-volume values such as configuration secrets.
//! - Key and nonce strings are never logged and are redacted in `Debug`.

pub mod keys;
pub mod shared;

pub use keys::{ActionKeys, ACTION_KEY_SETTING, ACTION_NONCE_SETTING};
pub use shared::{shared, SharedActionCipher};

use common::SecurityError;

use crate::crypto::cipher;
use crate::settings::SettingsSource;

/// Encrypts and decrypts strings under a fixed [`ActionKeys`] pair.
#[derive(Debug, Clone)]
pub struct ActionCipher {
    keys: ActionKeys,
}

impl ActionCipher {
    /// Create a cipher over an explicit key pair.
    pub fn new(keys: ActionKeys) -> Self {
        Self { keys }
    }

    /// Create a cipher from the configured key pair.
    pub fn from_settings<S: SettingsSource + ?Sized>(settings: &S) -> Self {
        Self::new(ActionKeys::from_settings(settings))
    }

    /// The key pair in use.
    pub fn keys(&self) -> &ActionKeys {
        &self.keys
    }

    /// Encrypt `data` with the configured pair.
    ///
    /// Blank input returns `Ok("")` without touching the key material.
    ///
    /// # Errors
    ///
    /// Any error from [`cipher::encrypt`], e.g. [`SecurityError::Crypto`] if
    /// the configured key or nonce is missing or the wrong length.
    pub fn encrypt<'a>(&self, data: impl Into<Option<&'a str>>) -> Result<String, SecurityError> {
        match non_blank(data.into()) {
            Some(data) => cipher::encrypt(data, self.keys.key(), self.keys.nonce()),
            None => Ok(String::new()),
        }
    }

    /// Decrypt a package produced by [`ActionCipher::encrypt`].
    ///
    /// Blank input returns `Ok("")`.
    ///
    /// # Errors
    ///
    /// Any error from [`cipher::decrypt`], including
    /// [`SecurityError::Authentication`] for tampered data or a different key.
    pub fn decrypt<'a>(&self, data: impl Into<Option<&'a str>>) -> Result<String, SecurityError> {
        match non_blank(data.into()) {
            Some(data) => cipher::decrypt(data, self.keys.key(), self.keys.nonce()),
            None => Ok(String::new()),
        }
    }
}

fn non_blank(data: Option<&str>) -> Option<&str> {
    data.filter(|d| !d.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> ActionCipher {
        ActionCipher::new(ActionKeys::new(
            "0123456789abcdef".repeat(4),
            "TestIV123456",
        ))
    }

    #[test]
    fn blank_input_short_circuits_both_ways() {
        let cipher = configured();
        for blank in [None, Some(""), Some("   "), Some("\t\r\n")] {
            assert_eq!(cipher.encrypt(blank).unwrap(), "");
            assert_eq!(cipher.decrypt(blank).unwrap(), "");
        }
    }

    #[test]
    fn blank_input_short_circuits_even_without_keys() {
        let cipher = ActionCipher::new(ActionKeys::new("", ""));
        assert_eq!(cipher.encrypt("  ").unwrap(), "");
        assert_eq!(cipher.decrypt(None).unwrap(), "");
    }

    #[test]
    fn round_trips_and_matches_low_level_api() {
        let action = configured();
        let encrypted = action.encrypt("Server=db;Password=hunter2").unwrap();
        let direct = cipher::encrypt(
            "Server=db;Password=hunter2",
            action.keys().key(),
            action.keys().nonce(),
        )
        .unwrap();
        assert_eq!(encrypted, direct);
        assert_eq!(
            action.decrypt(encrypted.as_str()).unwrap(),
            "Server=db;Password=hunter2"
        );
    }

    #[test]
    fn repeated_operations_are_consistent() {
        let cipher = configured();
        let first = cipher.encrypt("Consistency test").unwrap();
        for _ in 0..5 {
            assert_eq!(cipher.encrypt("Consistency test").unwrap(), first);
            assert_eq!(cipher.decrypt(first.as_str()).unwrap(), "Consistency test");
        }
    }

    #[test]
    fn missing_keys_fail_non_blank_input() {
        let cipher = ActionCipher::new(ActionKeys::new("", ""));
        assert!(matches!(
            cipher.encrypt("data"),
            Err(SecurityError::Crypto(_))
        ));
    }

    #[test]
    fn foreign_package_fails_authentication() {
        let other = ActionCipher::new(ActionKeys::new(
            "fedcba9876543210".repeat(4),
            "TestIV123456",
        ));
        let encrypted = other.encrypt("not yours").unwrap();
        assert_eq!(
            configured().decrypt(encrypted.as_str()).unwrap_err(),
            SecurityError::Authentication
        );
    }
}
