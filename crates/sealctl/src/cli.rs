//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Seal and open values in the action encryption wire format.
#[derive(Debug, Parser)]
#[command(name = "sealctl", version)]
pub struct Cli {
    /// Settings file to read instead of `SETTINGS_PATH`.
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encrypt TEXT under an explicit key and nonce.
    Encrypt {
        /// 64 hex characters.
        #[arg(long)]
        key: String,
        /// String that UTF-8 encodes to 12 bytes.
        #[arg(long)]
        nonce: String,
        text: String,
    },
    /// Decrypt a Base64 PACKAGE under an explicit key and nonce.
    Decrypt {
        #[arg(long)]
        key: String,
        #[arg(long)]
        nonce: String,
        package: String,
    },
    /// Encrypt TEXT with the configured action key pair.
    AcEnc { text: Option<String> },
    /// Decrypt PACKAGE with the configured action key pair.
    AcDec { package: Option<String> },
    /// Print the configured connection string, decrypting it if flagged.
    ConnString,
    /// Generate a fresh key and nonce.
    Keygen,
}
