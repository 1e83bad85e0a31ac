//! `sealctl` — operator CLI entry point.
//!
//! Startup sequence, after argument parsing:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise structured JSON logging on stderr.
//! 3. Load application settings (file + `OMNI__` environment overrides).
//! 4. Run the command and print one JSON object on stdout.

mod cli;
mod commands;
mod config;
mod telemetry;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use common::protocol::ErrorResponse;
use security::AppSettings;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config::Config;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: sealctl configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;

    // -----------------------------------------------------------------------
    // 3. Application settings
    // -----------------------------------------------------------------------
    let path = cli
        .settings
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.settings_path));
    let settings = AppSettings::load(&path)
        .with_context(|| format!("failed to load settings from {}", path.display()))?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        settings = %path.display(),
        "sealctl starting"
    );

    // -----------------------------------------------------------------------
    // 4. Command
    // -----------------------------------------------------------------------
    match commands::run(&cli.command, &settings) {
        Ok(output) => {
            println!("{}", serde_json::to_string(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            warn!(code = e.code(), "command failed");
            println!("{}", serde_json::to_string(&ErrorResponse::from(&e))?);
            Ok(ExitCode::FAILURE)
        }
    }
}
