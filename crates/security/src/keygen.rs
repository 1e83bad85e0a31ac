//! Random key and nonce values for provisioning `appsettings.json`.

use aes_gcm::aead::{rand_core::RngCore, OsRng};
use zeroize::Zeroizing;

use crate::crypto::{KEY_LEN, NONCE_LEN};
use crate::hex;

/// Printable ASCII range used for generated nonces (`' '..='~'`).
const PRINTABLE_FIRST: u8 = 0x20;
const PRINTABLE_COUNT: u8 = 95;

/// 32 bytes from the OS CSPRNG as 64 lowercase hex characters.
pub fn generate_key_hex() -> String {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    OsRng.fill_bytes(&mut key[..]);
    hex::encode(&key[..])
}

/// 12 random printable ASCII characters, usable as an `EncryptionActionIV`.
pub fn generate_nonce() -> String {
    let mut raw = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut raw);
    raw.iter()
        .map(|b| char::from(PRINTABLE_FIRST + b % PRINTABLE_COUNT))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::cipher;

    #[test]
    fn key_is_64_lowercase_hex_chars() {
        let key = generate_key_hex();
        assert_eq!(key.len(), KEY_LEN * 2);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn nonce_is_12_printable_bytes() {
        let nonce = generate_nonce();
        assert_eq!(nonce.len(), NONCE_LEN);
        assert!(nonce.bytes().all(|b| (0x20..=0x7E).contains(&b)));
    }

    #[test]
    fn generated_values_differ() {
        assert_ne!(generate_key_hex(), generate_key_hex());
    }

    #[test]
    fn generated_pair_is_usable() {
        let key = generate_key_hex();
        let nonce = generate_nonce();
        let encrypted = cipher::encrypt("provisioned", key.as_str(), nonce.as_str()).unwrap();
        assert_eq!(
            cipher::decrypt(encrypted.as_str(), key.as_str(), nonce.as_str()).unwrap(),
            "provisioned"
        );
    }
}
