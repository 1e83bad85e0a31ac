//! Configuration loading and validation for the `sealctl` binary.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated `sealctl` configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the JSON application settings file.
    #[serde(default = "default_settings_path")]
    pub settings_path: String,

    /// Tracing log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_settings_path() -> String {
    "appsettings.json".into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build sealctl configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise sealctl configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.settings_path.trim().is_empty() {
            anyhow::bail!("SETTINGS_PATH must not be empty");
        }
        if self.log_level.trim().is_empty() {
            anyhow::bail!("LOG_LEVEL must not be empty");
        }
        Ok(())
    }
}
