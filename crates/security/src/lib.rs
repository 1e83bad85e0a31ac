//! AES-256-GCM string encryption for configuration values.
//!
//! - [`crypto`]: the low-level `encrypt`/`decrypt` pair over the packed
//!   `nonce ‖ tag ‖ ciphertext` Base64 format.
//! - [`action`]: encryption under the key/nonce pair configured in
//!   `AppSettings`, with a no-op for blank input.
//! - [`connection`]: the database connection string, decrypted when the
//!   settings flag it as encrypted.
//! - [`settings`]: the settings lookup all of the above read from.
//! - [`keygen`]: fresh key and nonce values for new deployments.

pub mod action;
pub mod connection;
pub mod crypto;
pub mod hex;
pub mod keygen;
pub mod settings;

pub use action::{ActionCipher, ActionKeys, SharedActionCipher};
pub use common::SecurityError;
pub use connection::connection_string;
pub use crypto::{decrypt, encrypt, EncryptedPackage};
pub use settings::{AppSettings, SettingsSource};
