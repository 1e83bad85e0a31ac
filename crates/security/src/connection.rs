//! Resolution of the database connection string.

use common::SecurityError;
use tracing::debug;

use crate::action::ActionCipher;
use crate::settings::SettingsSource;

/// `AppSettings` flag: `"Y"` (any case) when the stored connection string is encrypted.
pub const ENCRYPTED_FLAG_SETTING: &str = "IsEncryptedConnString";

/// Name of the connection string under `ConnectionStrings`.
pub const CONNECTION_STRING_NAME: &str = "ConnectionString";

/// Return the configured connection string, decrypted when flagged.
///
/// An absent connection string yields `""` in both modes.
///
/// # Errors
///
/// When the flag is set, any error from [`ActionCipher::decrypt`].
pub fn connection_string<S: SettingsSource + ?Sized>(
    settings: &S,
    action: &ActionCipher,
) -> Result<String, SecurityError> {
    let stored = settings.connection(CONNECTION_STRING_NAME);
    if is_encrypted(settings) {
        debug!("decrypting stored connection string");
        action.decrypt(stored.as_str())
    } else {
        Ok(stored)
    }
}

fn is_encrypted<S: SettingsSource + ?Sized>(settings: &S) -> bool {
    settings
        .get(ENCRYPTED_FLAG_SETTING, "")
        .eq_ignore_ascii_case("Y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKeys;
    use crate::settings::MockSettingsSource;

    const PLAIN: &str = "Server=.;Database=Omni;User Id=sa;Password=secret";

    fn action() -> ActionCipher {
        ActionCipher::new(ActionKeys::new(
            "0123456789abcdef".repeat(4),
            "TestIV123456",
        ))
    }

    fn settings(flag: &'static str, stored: String) -> MockSettingsSource {
        let mut settings = MockSettingsSource::new();
        settings.expect_get().returning(move |key, _| match key {
            ENCRYPTED_FLAG_SETTING => flag.to_string(),
            _ => String::new(),
        });
        settings
            .expect_connection()
            .returning(move |name| {
                assert_eq!(name, CONNECTION_STRING_NAME);
                stored.clone()
            });
        settings
    }

    #[test]
    fn plain_connection_string_returned_verbatim() {
        let s = settings("N", PLAIN.to_string());
        assert_eq!(connection_string(&s, &action()).unwrap(), PLAIN);
    }

    #[test]
    fn missing_flag_means_plain() {
        let s = settings("", PLAIN.to_string());
        assert_eq!(connection_string(&s, &action()).unwrap(), PLAIN);
    }

    #[test]
    fn flagged_connection_string_is_decrypted() {
        let encrypted = action().encrypt(PLAIN).unwrap();
        for flag in ["Y", "y"] {
            let s = settings(flag, encrypted.clone());
            assert_eq!(connection_string(&s, &action()).unwrap(), PLAIN);
        }
    }

    #[test]
    fn flagged_but_absent_connection_string_is_empty() {
        let s = settings("Y", String::new());
        assert_eq!(connection_string(&s, &action()).unwrap(), "");
    }

    #[test]
    fn flagged_plaintext_fails_instead_of_leaking_through() {
        let s = settings("Y", "Server=.;Database=Omni".to_string());
        assert!(connection_string(&s, &action()).is_err());
    }
}
