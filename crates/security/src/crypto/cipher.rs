//! AES-256-GCM encryption and decryption of individual string values.
//!
//! **Determinism:** the nonce is supplied by the caller, never generated here.
//! Identical plaintext + key + nonce always produces the same package. GCM
//! nonce reuse under one key leaks the XOR of plaintexts and weakens tag
//! forgery resistance; callers that encrypt many distinct values should vary
//! the nonce.

use aes_gcm::{
    aead::{AeadInPlace, KeyInit},
    Aes256Gcm, Nonce, Tag,
};
use common::SecurityError;
use tracing::debug;
use zeroize::Zeroizing;

use super::key::KeyBytes;
use super::package::{EncryptedPackage, NONCE_LEN, TAG_LEN};

/// Encrypt `plaintext` and return the Base64 package `nonce ‖ tag ‖ ciphertext`.
///
/// `key_hex` must be 64 hex characters; `nonce` must be exactly
/// [`NONCE_LEN`] bytes once UTF-8 encoded. Arguments accept either `&str` or
/// `Option<&str>`.
///
/// # Errors
///
/// - [`SecurityError::NullInput`] if any argument is `None`.
/// - [`SecurityError::Format`] if `key_hex` is not valid hex.
/// - [`SecurityError::Crypto`] if the key or nonce has the wrong length.
pub fn encrypt<'a>(
    plaintext: impl Into<Option<&'a str>>,
    key_hex: impl Into<Option<&'a str>>,
    nonce: impl Into<Option<&'a str>>,
) -> Result<String, SecurityError> {
    let plaintext = required(plaintext.into(), "plaintext")?;
    let key_hex = required(key_hex.into(), "key")?;
    let nonce = required(nonce.into(), "nonce")?;

    let key = KeyBytes::from_hex(key_hex)?;
    let nonce = nonce_from_str(nonce)?;
    let package = seal(plaintext.as_bytes(), &key, nonce)?;
    Ok(package.to_base64())
}

/// Decrypt a Base64 package produced by [`encrypt`].
///
/// The nonce embedded in the package is the one used for decryption. The
/// `nonce` argument must still encode to [`NONCE_LEN`] bytes but its content
/// does not affect the result.
///
/// Recovered bytes are decoded as UTF-8; invalid sequences become U+FFFD.
///
/// # Errors
///
/// - [`SecurityError::NullInput`] if any argument is `None`.
/// - [`SecurityError::Format`] on invalid Base64, a package shorter than 28
///   bytes, or a malformed hex key.
/// - [`SecurityError::Crypto`] if the key or nonce has the wrong length.
/// - [`SecurityError::Authentication`] if the tag does not verify. No
///   plaintext is returned in that case.
pub fn decrypt<'a>(
    package: impl Into<Option<&'a str>>,
    key_hex: impl Into<Option<&'a str>>,
    nonce: impl Into<Option<&'a str>>,
) -> Result<String, SecurityError> {
    let package = required(package.into(), "package")?;
    let key_hex = required(key_hex.into(), "key")?;
    let nonce = required(nonce.into(), "nonce")?;

    let package = EncryptedPackage::from_base64(package)?;
    let key = KeyBytes::from_hex(key_hex)?;
    nonce_from_str(nonce)?;

    let plaintext = open(&package, &key)?;
    Ok(String::from_utf8_lossy(&plaintext).into_owned())
}

/// Encrypt raw bytes under `key` and `nonce` into an [`EncryptedPackage`].
///
/// # Errors
///
/// Returns [`SecurityError::Crypto`] on an internal AEAD error (unreachable
/// with a valid key and nonce).
pub fn seal(
    plaintext: &[u8],
    key: &KeyBytes,
    nonce: [u8; NONCE_LEN],
) -> Result<EncryptedPackage, SecurityError> {
    let cipher = build_cipher(key)?;
    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&nonce), b"", buffer.as_mut_slice())
        .map_err(|_| SecurityError::Crypto("aead encryption failed".into()))?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(tag.as_slice());

    Ok(EncryptedPackage {
        nonce,
        tag: tag_bytes,
        ciphertext: buffer,
    })
}

/// Verify and decrypt an [`EncryptedPackage`] back to plaintext bytes.
///
/// # Errors
///
/// Returns [`SecurityError::Authentication`] if the tag does not verify
/// (wrong key or tampered data). The working buffer is zeroed before the
/// error is returned.
pub fn open(package: &EncryptedPackage, key: &KeyBytes) -> Result<Zeroizing<Vec<u8>>, SecurityError> {
    let cipher = build_cipher(key)?;
    let mut buffer = Zeroizing::new(package.ciphertext.clone());
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(&package.nonce),
            b"",
            buffer.as_mut_slice(),
            Tag::from_slice(&package.tag),
        )
        .map_err(|_| {
            debug!(
                ciphertext_len = package.ciphertext.len(),
                "authentication tag mismatch"
            );
            SecurityError::Authentication
        })?;
    Ok(buffer)
}

/// UTF-8 encode a nonce string, requiring exactly [`NONCE_LEN`] bytes.
///
/// # Errors
///
/// Returns [`SecurityError::Crypto`] for any other length.
pub fn nonce_from_str(nonce: &str) -> Result<[u8; NONCE_LEN], SecurityError> {
    nonce.as_bytes().try_into().map_err(|_| {
        SecurityError::Crypto(format!(
            "nonce must be {NONCE_LEN} bytes, got {}",
            nonce.len()
        ))
    })
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, SecurityError> {
    value.ok_or(SecurityError::NullInput(name))
}

fn build_cipher(key: &KeyBytes) -> Result<Aes256Gcm, SecurityError> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| SecurityError::Crypto("invalid AES-256 key length".into()))
}
