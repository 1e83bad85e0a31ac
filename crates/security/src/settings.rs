//! Application settings lookup.
//!
//! [`SettingsSource`] is the string-lookup contract the action facade and the
//! connection-string consumer read from. Lookups never fail: an absent key, a
//! non-scalar value, or an empty name all yield an empty string.
//!
//! [`AppSettings`] implements it on top of an `appsettings.json` file layered
//! with `OMNI__`-prefixed environment overrides, e.g.
//! `OMNI__APPSETTINGS__ENCRYPTIONACTIONKEY`.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Section consulted when [`SettingsSource::get`] is called without one.
pub const APP_SETTINGS_SECTION: &str = "AppSettings";

/// Section holding named connection strings.
pub const CONNECTION_STRINGS_SECTION: &str = "ConnectionStrings";

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "OMNI";

/// Errors raised while building [`AppSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file or environment could not be read or parsed.
    #[error("failed to load application settings: {0}")]
    Load(#[from] config::ConfigError),
}

/// String lookup by name.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsSource: Send + Sync {
    /// Value at `<section>:<key>`, or `AppSettings:<key>` when `section` is
    /// empty. Returns `""` when the value is absent.
    fn get(&self, key: &str, section: &str) -> String;

    /// Connection string stored under `ConnectionStrings:<name>`, or `""`.
    fn connection(&self, name: &str) -> String;
}

/// Settings tree loaded once from file and environment.
///
/// Key matching is case-insensitive on every path segment.
#[derive(Debug, Clone, Default)]
pub struct AppSettings {
    root: Value,
}

impl AppSettings {
    /// Load `path` (optional JSON file) and layer environment overrides on top.
    ///
    /// A missing file is not an error; a malformed one is.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] if a source cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let cfg = config::Config::builder()
            .add_source(
                config::File::from(path.as_ref())
                    .format(config::FileFormat::Json)
                    .required(false),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        Self::from_config(cfg)
    }

    /// Wrap an already-built [`config::Config`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] if the config cannot be materialised.
    pub fn from_config(cfg: config::Config) -> Result<Self, SettingsError> {
        let root: Value = cfg.try_deserialize()?;
        Ok(Self { root })
    }

    /// Settings with no values; every lookup returns `""`.
    pub fn empty() -> Self {
        Self::default()
    }

    fn lookup(&self, path: &[&str]) -> Option<String> {
        let mut nodes = vec![&self.root];
        for &segment in path {
            nodes = nodes
                .into_iter()
                .filter_map(Value::as_object)
                .flat_map(move |map| {
                    map.iter()
                        .filter(move |(k, _)| k.eq_ignore_ascii_case(segment))
                        .map(|(_, v)| v)
                })
                .collect();
        }
        // Environment keys arrive lowercased and sort after the file's
        // spelling, so the last scalar wins.
        nodes.into_iter().rev().find_map(scalar)
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl SettingsSource for AppSettings {
    fn get(&self, key: &str, section: &str) -> String {
        if key.is_empty() {
            return String::new();
        }
        let section = if section.is_empty() {
            APP_SETTINGS_SECTION
        } else {
            section
        };
        self.lookup(&[section, key]).unwrap_or_default()
    }

    fn connection(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }
        self.lookup(&[CONNECTION_STRINGS_SECTION, name])
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"{
        "AppSettings": {
            "EncryptionActionKey": "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef",
            "EncryptionActionIV": "TestIV123456",
            "IsEncryptedConnString": "N",
            "RetryCount": 3,
            "Nested": { "Inner": "x" }
        },
        "Database": { "Provider": "SqlServer" },
        "ConnectionStrings": { "ConnectionString": "Server=.;Database=Omni" }
    }"#;

    fn sample() -> AppSettings {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(SAMPLE, config::FileFormat::Json))
            .build()
            .unwrap();
        AppSettings::from_config(cfg).unwrap()
    }

    #[test]
    fn reads_app_settings_by_default() {
        let s = sample();
        assert_eq!(s.get("EncryptionActionIV", ""), "TestIV123456");
        assert_eq!(s.get("IsEncryptedConnString", ""), "N");
    }

    #[test]
    fn reads_named_section() {
        assert_eq!(sample().get("Provider", "Database"), "SqlServer");
    }

    #[test]
    fn keys_are_case_insensitive() {
        let s = sample();
        assert_eq!(s.get("encryptionactioniv", "appsettings"), "TestIV123456");
        assert_eq!(s.connection("connectionstring"), "Server=.;Database=Omni");
    }

    #[test]
    fn scalars_render_as_strings() {
        assert_eq!(sample().get("RetryCount", ""), "3");
    }

    #[test]
    fn absent_or_non_scalar_values_are_empty() {
        let s = sample();
        assert_eq!(s.get("Missing", ""), "");
        assert_eq!(s.get("", ""), "");
        assert_eq!(s.get("Nested", ""), "");
        assert_eq!(s.get("Provider", "NoSuchSection"), "");
        assert_eq!(s.connection(""), "");
        assert_eq!(s.connection("Reporting"), "");
    }

    #[test]
    fn empty_settings_return_empty_strings() {
        let s = AppSettings::empty();
        assert_eq!(s.get("EncryptionActionKey", ""), "");
        assert_eq!(s.connection("ConnectionString"), "");
    }

    #[test]
    fn loads_json_file_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let s = AppSettings::load(file.path()).unwrap();
        assert_eq!(s.get("EncryptionActionIV", ""), "TestIV123456");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let s = AppSettings::load(dir.path().join("appsettings.json")).unwrap();
        assert_eq!(s.get("DefinitelyNotSetAnywhere", ""), "");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(AppSettings::load(file.path()).is_err());
    }
}
