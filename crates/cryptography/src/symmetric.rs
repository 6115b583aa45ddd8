//! Symmetric encryption of arbitrary-length payloads under a shared secret.
//!
//! [`DeterministicSymmetricCipher`] runs AES in ECB mode with PKCS#7 padding.
//! There is no IV: identical plaintext under an identical key always yields
//! identical ciphertext, and equal plaintext blocks are visible as equal
//! ciphertext blocks. Use it only where byte-for-byte compatibility with
//! existing ciphertext is required; otherwise prefer
//! [`SealedSymmetricCipher`](crate::sealed::SealedSymmetricCipher).

use aes::{Aes128, Aes192, Aes256};
use common::NullOrEmpty;
use ecb::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit};
use tracing::debug;

use crate::error::{EncryptionError, Result};

/// AES block length in bytes.
pub const BLOCK_LEN: usize = 16;

pub(crate) const PLAIN_DATA_EMPTY: &str = "Plain data is null or empty";
pub(crate) const ENCRYPTED_DATA_EMPTY: &str = "encryptedData is null or empty";
pub(crate) const KEY_EMPTY: &str = "Encryption key is null or empty";

/// Encrypts and decrypts byte payloads under a single shared key.
///
/// Implementations hold no per-call state and may be shared across threads.
pub trait SymmetricEncryption: Send + Sync {
    /// Encrypt `plain_data` under `key`.
    ///
    /// # Errors
    ///
    /// [`EncryptionError::EmptyInput`] if `plain_data` is empty,
    /// [`EncryptionError::EmptyKey`] if `key` is empty, and
    /// [`EncryptionError::CryptographicFailure`] if the key is rejected.
    fn encrypt(&self, plain_data: &[u8], key: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt `encrypted_data` under `key`, returning the original plaintext.
    ///
    /// # Errors
    ///
    /// [`EncryptionError::EmptyInput`] if `encrypted_data` is empty,
    /// [`EncryptionError::EmptyKey`] if `key` is empty, and
    /// [`EncryptionError::CryptographicFailure`] if the key, the ciphertext
    /// length, or the recovered padding is invalid.
    fn decrypt(&self, encrypted_data: &[u8], key: &[u8]) -> Result<Vec<u8>>;
}

/// AES-ECB with PKCS#7 padding. Key length picks AES-128, AES-192 or AES-256.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeterministicSymmetricCipher;

impl DeterministicSymmetricCipher {
    pub fn new() -> Self {
        Self
    }
}

impl SymmetricEncryption for DeterministicSymmetricCipher {
    fn encrypt(&self, plain_data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        if plain_data.is_null_or_empty() {
            return Err(EncryptionError::EmptyInput(PLAIN_DATA_EMPTY));
        }
        if key.is_null_or_empty() {
            return Err(EncryptionError::EmptyKey(KEY_EMPTY));
        }

        let ciphertext = match AesVariant::for_key(key)? {
            AesVariant::Aes128 => ecb::Encryptor::<Aes128>::new_from_slice(key)
                .map(|enc| enc.encrypt_padded_vec_mut::<Pkcs7>(plain_data)),
            AesVariant::Aes192 => ecb::Encryptor::<Aes192>::new_from_slice(key)
                .map(|enc| enc.encrypt_padded_vec_mut::<Pkcs7>(plain_data)),
            AesVariant::Aes256 => ecb::Encryptor::<Aes256>::new_from_slice(key)
                .map(|enc| enc.encrypt_padded_vec_mut::<Pkcs7>(plain_data)),
        };
        ciphertext.map_err(|_| invalid_key_length(key.len()))
    }

    fn decrypt(&self, encrypted_data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        if encrypted_data.is_null_or_empty() {
            return Err(EncryptionError::EmptyInput(ENCRYPTED_DATA_EMPTY));
        }
        if key.is_null_or_empty() {
            return Err(EncryptionError::EmptyKey(KEY_EMPTY));
        }

        let variant = AesVariant::for_key(key)?;
        if encrypted_data.len() % BLOCK_LEN != 0 {
            debug!(
                ciphertext_len = encrypted_data.len(),
                "symmetric decrypt rejected: ciphertext not block aligned"
            );
            return Err(EncryptionError::crypto(format!(
                "ciphertext length {} is not a multiple of the {BLOCK_LEN}-byte block size",
                encrypted_data.len()
            )));
        }

        let plaintext = match variant {
            AesVariant::Aes128 => ecb::Decryptor::<Aes128>::new_from_slice(key)
                .map(|dec| dec.decrypt_padded_vec_mut::<Pkcs7>(encrypted_data)),
            AesVariant::Aes192 => ecb::Decryptor::<Aes192>::new_from_slice(key)
                .map(|dec| dec.decrypt_padded_vec_mut::<Pkcs7>(encrypted_data)),
            AesVariant::Aes256 => ecb::Decryptor::<Aes256>::new_from_slice(key)
                .map(|dec| dec.decrypt_padded_vec_mut::<Pkcs7>(encrypted_data)),
        }
        .map_err(|_| invalid_key_length(key.len()))?;

        plaintext.map_err(|_| {
            debug!(
                ciphertext_len = encrypted_data.len(),
                "symmetric decrypt rejected: invalid padding"
            );
            EncryptionError::crypto("padding is invalid and cannot be removed")
        })
    }
}

/// AES key schedules accepted by the deterministic cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AesVariant {
    Aes128,
    Aes192,
    Aes256,
}

impl AesVariant {
    fn for_key(key: &[u8]) -> Result<Self> {
        match key.len() {
            16 => Ok(AesVariant::Aes128),
            24 => Ok(AesVariant::Aes192),
            32 => Ok(AesVariant::Aes256),
            n => Err(invalid_key_length(n)),
        }
    }
}

fn invalid_key_length(len: usize) -> EncryptionError {
    debug!(key_len = len, "symmetric key rejected");
    EncryptionError::crypto(format!(
        "invalid AES key length: expected 16, 24 or 32 bytes, got {len}"
    ))
}
