//! [`ActionKeys`]: the key/nonce pair behind action encryption.

use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::settings::SettingsSource;

/// Setting holding the 64-character hex key.
pub const ACTION_KEY_SETTING: &str = "EncryptionActionKey";

/// Setting holding the 12-byte nonce string.
pub const ACTION_NONCE_SETTING: &str = "EncryptionActionIV";

/// Immutable key/nonce strings, exactly as configured.
///
/// Values are kept in their textual form and validated on every use, so a
/// missing or malformed setting surfaces as a [`common::SecurityError`] from
/// the operation that needs it rather than at load time. Both strings are
/// zeroed on drop.
#[derive(Clone)]
pub struct ActionKeys {
    key: Zeroizing<String>,
    nonce: Zeroizing<String>,
}

impl ActionKeys {
    /// Build a pair from explicit values.
    pub fn new(key: impl Into<String>, nonce: impl Into<String>) -> Self {
        Self {
            key: Zeroizing::new(key.into()),
            nonce: Zeroizing::new(nonce.into()),
        }
    }

    /// Read `AppSettings:EncryptionActionKey` and `AppSettings:EncryptionActionIV`.
    ///
    /// Absent values become empty strings.
    pub fn from_settings<S: SettingsSource + ?Sized>(settings: &S) -> Self {
        let keys = Self::new(
            settings.get(ACTION_KEY_SETTING, ""),
            settings.get(ACTION_NONCE_SETTING, ""),
        );
        let key_present = !keys.key.is_empty();
        let nonce_present = !keys.nonce.is_empty();
        info!(key_present, nonce_present, "action keys loaded");
        if !keys.is_complete() {
            warn!("action key or nonce missing from settings; action encryption will fail");
        }
        keys
    }

    /// The hex key string.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The nonce string.
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Returns `true` if both values are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.nonce.is_empty()
    }
}

impl std::fmt::Debug for ActionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionKeys")
            .field("key", &"[REDACTED]")
            .field("nonce", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MockSettingsSource;

    #[test]
    fn reads_both_settings_from_app_settings_section() {
        let mut settings = MockSettingsSource::new();
        settings
            .expect_get()
            .times(2)
            .returning(|key, section| {
                assert_eq!(section, "");
                match key {
                    ACTION_KEY_SETTING => "ab".repeat(32),
                    ACTION_NONCE_SETTING => "TestIV123456".into(),
                    other => panic!("unexpected setting {other}"),
                }
            });
        let keys = ActionKeys::from_settings(&settings);
        assert_eq!(keys.key(), "ab".repeat(32));
        assert_eq!(keys.nonce(), "TestIV123456");
        assert!(keys.is_complete());
    }

    #[test]
    fn missing_settings_default_to_empty() {
        let mut settings = MockSettingsSource::new();
        settings.expect_get().returning(|_, _| String::new());
        let keys = ActionKeys::from_settings(&settings);
        assert_eq!(keys.key(), "");
        assert_eq!(keys.nonce(), "");
        assert!(!keys.is_complete());
    }

    #[test]
    fn debug_redacts_values() {
        let keys = ActionKeys::new("deadbeef", "TestIV123456");
        let shown = format!("{keys:?}");
        assert!(shown.contains("REDACTED"));
        assert!(!shown.contains("deadbeef"));
        assert!(!shown.contains("TestIV"));
    }
}
