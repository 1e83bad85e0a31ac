//! AES-256-GCM string encryption primitives.
//!
//! This module is intentionally free of configuration and logging setup.
//! It provides the low-level encrypt/decrypt operations used by the action
//! facade and by callers that manage their own key and nonce.
//!
//! # Ciphertext format
//!
//! ```text
//! base64( nonce(12) ‖ tag(16) ‖ ciphertext(N) )
//! ```
//!
//! `N` equals the plaintext byte length; GCM adds no padding.

pub mod cipher;
pub mod key;
pub mod package;

pub use cipher::{decrypt, encrypt};
pub use key::{KeyBytes, KEY_LEN};
pub use package::{EncryptedPackage, MIN_PACKAGE_LEN, NONCE_LEN, TAG_LEN};
