//! RSA-OAEP encryption of small payloads under a public/private key pair.
//!
//! Keys are passed as DER blobs: the public key as a PKCS#1 `RSAPublicKey`,
//! the private key as a PKCS#8 `PrivateKeyInfo`. OAEP uses SHA-256 for both
//! the label hash and MGF1, so ciphertext is randomised and always exactly as
//! long as the key modulus.

use common::NullOrEmpty;
use rand::rngs::OsRng;
use rsa::{
    pkcs1::DecodeRsaPublicKey, pkcs8::DecodePrivateKey, traits::PublicKeyParts, Oaep,
    RsaPrivateKey, RsaPublicKey,
};
use sha2::Sha256;
use tracing::debug;

use crate::error::{EncryptionError, Result};

/// Largest plaintext, in bytes, accepted by [`AsymmetricEncryption::encrypt`].
pub const MAX_PAYLOAD_LEN: usize = 200;

const DATA_EMPTY: &str = "data is null or empty";
const ENCRYPTED_DATA_EMPTY: &str = "encryptedData is null or empty";
const PUBLIC_KEY_EMPTY: &str = "public key is null or empty";
const PRIVATE_KEY_EMPTY: &str = "private key is null or empty";

/// Encrypts under a public key and decrypts under the matching private key.
pub trait AsymmetricEncryption: Send + Sync {
    /// Encrypt `data` under the DER-encoded `public_key`.
    ///
    /// # Errors
    ///
    /// [`EncryptionError::EmptyInput`], [`EncryptionError::EmptyKey`] and
    /// [`EncryptionError::PayloadTooLarge`] are checked in that order before the
    /// key is parsed; a malformed key or a payload the key cannot hold is a
    /// [`EncryptionError::CryptographicFailure`].
    fn encrypt(&self, data: &[u8], public_key: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt `encrypted_data` under the DER-encoded `private_key`.
    ///
    /// # Errors
    ///
    /// [`EncryptionError::EmptyInput`] and [`EncryptionError::EmptyKey`] for
    /// empty buffers; [`EncryptionError::CryptographicFailure`] for a malformed
    /// key or ciphertext not produced under the matching public key.
    fn decrypt(&self, encrypted_data: &[u8], private_key: &[u8]) -> Result<Vec<u8>>;
}

/// RSA with OAEP-SHA256 padding.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsymmetricCipher;

impl AsymmetricCipher {
    pub fn new() -> Self {
        Self
    }

    /// Length in bytes of every ciphertext produced under `public_key`.
    ///
    /// # Errors
    ///
    /// [`EncryptionError::EmptyKey`] if `public_key` is empty;
    /// [`EncryptionError::CryptographicFailure`] if it cannot be parsed.
    pub fn ciphertext_len(public_key: &[u8]) -> Result<usize> {
        if public_key.is_null_or_empty() {
            return Err(EncryptionError::EmptyKey(PUBLIC_KEY_EMPTY));
        }
        Ok(import_public_key(public_key)?.size())
    }
}

impl AsymmetricEncryption for AsymmetricCipher {
    fn encrypt(&self, data: &[u8], public_key: &[u8]) -> Result<Vec<u8>> {
        if data.is_null_or_empty() {
            return Err(EncryptionError::EmptyInput(DATA_EMPTY));
        }
        if public_key.is_null_or_empty() {
            return Err(EncryptionError::EmptyKey(PUBLIC_KEY_EMPTY));
        }
        if data.len() > MAX_PAYLOAD_LEN {
            debug!(data_len = data.len(), "asymmetric payload too large");
            return Err(EncryptionError::PayloadTooLarge {
                max: MAX_PAYLOAD_LEN,
            });
        }

        let key = import_public_key(public_key)?;
        key.encrypt(&mut OsRng, Oaep::new::<Sha256>(), data)
            .map_err(|e| {
                debug!(
                    data_len = data.len(),
                    modulus_len = key.size(),
                    "RSA-OAEP encryption failed"
                );
                EncryptionError::crypto(format!("RSA-OAEP encryption failed: {e}"))
            })
    }

    fn decrypt(&self, encrypted_data: &[u8], private_key: &[u8]) -> Result<Vec<u8>> {
        if encrypted_data.is_null_or_empty() {
            return Err(EncryptionError::EmptyInput(ENCRYPTED_DATA_EMPTY));
        }
        if private_key.is_null_or_empty() {
            return Err(EncryptionError::EmptyKey(PRIVATE_KEY_EMPTY));
        }

        let key = import_private_key(private_key)?;
        key.decrypt(Oaep::new::<Sha256>(), encrypted_data)
            .map_err(|e| {
                debug!(
                    ciphertext_len = encrypted_data.len(),
                    modulus_len = key.size(),
                    "RSA-OAEP decryption failed"
                );
                EncryptionError::crypto(format!("RSA-OAEP decryption failed: {e}"))
            })
    }
}

fn import_public_key(der: &[u8]) -> Result<RsaPublicKey> {
    RsaPublicKey::from_pkcs1_der(der).map_err(|e| {
        debug!(key_len = der.len(), "public key import failed");
        EncryptionError::crypto(format!("invalid PKCS#1 public key: {e}"))
    })
}

fn import_private_key(der: &[u8]) -> Result<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_der(der).map_err(|e| {
        debug!(key_len = der.len(), "private key import failed");
        EncryptionError::crypto(format!("invalid PKCS#8 private key: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const PUBLIC_3072: &[u8] = include_bytes!("../testdata/rsa3072_public.der");
    const PRIVATE_3072: &[u8] = include_bytes!("../testdata/rsa3072_private.der");
    const PUBLIC_2048: &[u8] = include_bytes!("../testdata/rsa2048_public.der");
    const PRIVATE_2048: &[u8] = include_bytes!("../testdata/rsa2048_private.der");
    /// OAEP-SHA256 ciphertext of `ONION_PLAINTEXT` under the 3072-bit key, produced by another implementation.
    const ONION_CIPHERTEXT: &[u8] = include_bytes!("../testdata/rsa3072_oaep_sha256.bin");
    const ONION_PLAINTEXT: &[u8] = b"onion layer key material";

    #[test]
    fn encrypt_rejects_empty_data() {
        let err = AsymmetricCipher::new().encrypt(&[], &[0x12]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
        assert_eq!(err.to_string(), "data is null or empty");
    }

    #[test]
    fn encrypt_rejects_empty_public_key() {
        let err = AsymmetricCipher::new().encrypt(&[0x12], &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyKey);
        assert_eq!(err.to_string(), "public key is null or empty");
    }

    #[test]
    fn encrypt_rejects_payload_over_limit_before_key_import() {
        let data = [0u8; MAX_PAYLOAD_LEN + 1];
        let err = AsymmetricCipher::new()
            .encrypt(&data, &[0x12, 0x34, 0x56])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PayloadTooLarge);
        assert_eq!(err.to_string(), "Data payload is more that 200 bytes");
    }

    #[test]
    fn payload_at_limit_round_trips() {
        let cipher = AsymmetricCipher::new();
        let data = [0xA5u8; MAX_PAYLOAD_LEN];
        let encrypted = cipher.encrypt(&data, PUBLIC_3072).unwrap();
        assert_eq!(cipher.decrypt(&encrypted, PRIVATE_3072).unwrap(), data);
    }

    #[test]
    fn payload_at_limit_exceeds_a_2048_bit_key() {
        let data = [0xA5u8; MAX_PAYLOAD_LEN];
        let err = AsymmetricCipher::new()
            .encrypt(&data, PUBLIC_2048)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CryptographicFailure);
    }

    #[test]
    fn same_sized_plaintexts_round_trip_with_constant_length() {
        let cipher = AsymmetricCipher::new();
        for len in [5usize, 10, 15, 20] {
            for i in 0u8..3 {
                let plain: Vec<u8> = (0..len).map(|j| b'a' + (i + j as u8) % 26).collect();
                let encrypted = cipher.encrypt(&plain, PUBLIC_3072).unwrap();
                assert_eq!(encrypted.len(), 384);
                assert_eq!(cipher.decrypt(&encrypted, PRIVATE_3072).unwrap(), plain);
            }
        }
    }

    #[test]
    fn ciphertext_length_is_independent_of_plaintext_length() {
        let cipher = AsymmetricCipher::new();
        let short = cipher.encrypt(b"x", PUBLIC_2048).unwrap();
        let long = cipher.encrypt(&[7u8; 150], PUBLIC_2048).unwrap();
        assert_eq!(short.len(), long.len());
        assert_eq!(short.len(), AsymmetricCipher::ciphertext_len(PUBLIC_2048).unwrap());
    }

    #[test]
    fn encryption_is_randomised() {
        let cipher = AsymmetricCipher::new();
        let a = cipher.encrypt(b"same input", PUBLIC_2048).unwrap();
        let b = cipher.encrypt(b"same input", PUBLIC_2048).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn decrypts_ciphertext_from_independent_implementation() {
        let decrypted = AsymmetricCipher::new()
            .decrypt(ONION_CIPHERTEXT, PRIVATE_3072)
            .unwrap();
        assert_eq!(decrypted, ONION_PLAINTEXT);
    }

    #[test]
    fn mismatched_private_key_fails() {
        let err = AsymmetricCipher::new()
            .decrypt(ONION_CIPHERTEXT, PRIVATE_2048)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CryptographicFailure);
    }

    #[test]
    fn corrupted_ciphertext_fails() {
        let mut corrupted = ONION_CIPHERTEXT.to_vec();
        corrupted[100] ^= 0x01;
        let err = AsymmetricCipher::new()
            .decrypt(&corrupted, PRIVATE_3072)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CryptographicFailure);
    }

    #[test]
    fn malformed_public_key_fails() {
        let err = AsymmetricCipher::new()
            .encrypt(b"data", &[0x12, 0x34, 0x56])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CryptographicFailure);
    }

    #[test]
    fn public_key_is_not_accepted_as_private_key() {
        let err = AsymmetricCipher::new()
            .decrypt(ONION_CIPHERTEXT, PUBLIC_3072)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CryptographicFailure);
    }

    #[test]
    fn decrypt_rejects_empty_encrypted_data() {
        let err = AsymmetricCipher::new().decrypt(&[], &[0x12]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyInput);
        assert_eq!(err.to_string(), "encryptedData is null or empty");
    }

    #[test]
    fn decrypt_rejects_empty_private_key() {
        let err = AsymmetricCipher::new().decrypt(&[0x12], &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyKey);
        assert_eq!(err.to_string(), "private key is null or empty");
    }

    #[test]
    fn ciphertext_len_reports_modulus_size() {
        assert_eq!(AsymmetricCipher::ciphertext_len(PUBLIC_3072).unwrap(), 384);
        assert_eq!(AsymmetricCipher::ciphertext_len(PUBLIC_2048).unwrap(), 256);
        assert_eq!(
            AsymmetricCipher::ciphertext_len(&[]).unwrap_err().kind(),
            ErrorKind::EmptyKey
        );
    }
}
