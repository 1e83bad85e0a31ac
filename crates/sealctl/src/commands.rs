//! Command execution, independent of stdin/stdout.

use common::protocol::{KeygenResponse, ValueResponse};
use common::SecurityError;
use security::{connection_string, crypto, keygen, ActionCipher, SettingsSource};
use serde::Serialize;
use tracing::debug;

use crate::cli::Command;

/// Successful command result, printed as one JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Value(ValueResponse),
    Keygen(KeygenResponse),
}

/// Run `command` against `settings`.
///
/// The action cipher is built from `settings` only for the commands that use
/// it.
///
/// # Errors
///
/// Propagates the [`SecurityError`] of the underlying operation unchanged.
pub fn run<S: SettingsSource + ?Sized>(
    command: &Command,
    settings: &S,
) -> Result<Output, SecurityError> {
    let value = match command {
        Command::Encrypt { key, nonce, text } => {
            crypto::encrypt(text.as_str(), key.as_str(), nonce.as_str())?
        }
        Command::Decrypt {
            key,
            nonce,
            package,
        } => crypto::decrypt(package.as_str(), key.as_str(), nonce.as_str())?,
        Command::AcEnc { text } => ActionCipher::from_settings(settings).encrypt(text.as_deref())?,
        Command::AcDec { package } => {
            ActionCipher::from_settings(settings).decrypt(package.as_deref())?
        }
        Command::ConnString => {
            let action = ActionCipher::from_settings(settings);
            connection_string(settings, &action)?
        }
        Command::Keygen => {
            debug!("generating action key pair");
            return Ok(Output::Keygen(KeygenResponse {
                key: keygen::generate_key_hex(),
                nonce: keygen::generate_nonce(),
            }));
        }
    };
    Ok(Output::Value(ValueResponse::new(value)))
}
