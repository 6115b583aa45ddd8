//! AES-GCM-SIV symmetric encryption with a fresh nonce per call.
//!
//! Unlike [`DeterministicSymmetricCipher`](crate::symmetric::DeterministicSymmetricCipher),
//! repeated encryption of the same plaintext yields different output, and any
//! modification of the ciphertext is detected on decrypt.
//!
//! # Wire formats
//!
//! Binary (returned by [`SymmetricEncryption::encrypt`]):
//!
//! ```text
//! nonce (12 bytes) || ciphertext || tag (16 bytes)
//! ```
//!
//! Text ([`SealedPayload`]'s `Display` / `FromStr`):
//!
//! ```text
//! v1.<base64url-no-pad(nonce)>.<base64url-no-pad(ciphertext+tag)>
//! ```

use std::fmt;
use std::str::FromStr;

use aes_gcm_siv::{
    aead::{Aead, KeyInit},
    Aes128GcmSiv, Aes256GcmSiv, Nonce,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use common::NullOrEmpty;
use rand::{rngs::OsRng, RngCore};
use tracing::debug;

use crate::error::{EncryptionError, Result};
use crate::symmetric::{SymmetricEncryption, ENCRYPTED_DATA_EMPTY, KEY_EMPTY, PLAIN_DATA_EMPTY};

/// Byte length of an AES-GCM-SIV nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// Prefix of the textual form of a [`SealedPayload`].
pub const VERSION_PREFIX: &str = "v1";

/// A nonce together with the ciphertext it sealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedPayload {
    /// Raw nonce bytes.
    pub nonce: [u8; NONCE_LEN],
    /// Raw ciphertext + authentication tag bytes.
    pub ciphertext: Vec<u8>,
}

impl SealedPayload {
    /// Concatenate nonce and ciphertext into the binary wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(NONCE_LEN + self.ciphertext.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Split the binary wire format back into nonce and ciphertext.
    ///
    /// # Errors
    ///
    /// Returns [`EncryptionError::CryptographicFailure`] if `bytes` is too short
    /// to hold a nonce and an authentication tag.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < NONCE_LEN + TAG_LEN {
            return Err(EncryptionError::crypto(format!(
                "sealed payload of {} bytes is shorter than nonce and tag",
                bytes.len()
            )));
        }
        let (nonce_bytes, ciphertext) = bytes.split_at(NONCE_LEN);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(nonce_bytes);
        Ok(Self {
            nonce,
            ciphertext: ciphertext.to_vec(),
        })
    }
}

impl fmt::Display for SealedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            VERSION_PREFIX,
            URL_SAFE_NO_PAD.encode(self.nonce),
            URL_SAFE_NO_PAD.encode(&self.ciphertext),
        )
    }
}

impl FromStr for SealedPayload {
    type Err = EncryptionError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || EncryptionError::crypto("invalid sealed payload format");

        let parts: Vec<&str> = s.splitn(3, '.').collect();
        if parts.len() != 3 || parts[0] != VERSION_PREFIX {
            return Err(invalid());
        }
        let nonce_bytes = URL_SAFE_NO_PAD.decode(parts[1]).map_err(|_| invalid())?;
        if nonce_bytes.len() != NONCE_LEN {
            return Err(invalid());
        }
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&nonce_bytes);

        let ciphertext = URL_SAFE_NO_PAD.decode(parts[2]).map_err(|_| invalid())?;
        if ciphertext.len() < TAG_LEN {
            return Err(invalid());
        }

        Ok(Self { nonce, ciphertext })
    }
}

/// AES-GCM-SIV with a random 96-bit nonce per call.
///
/// A 16-byte key selects AES-128-GCM-SIV, a 32-byte key AES-256-GCM-SIV.
#[derive(Debug, Clone, Copy, Default)]
pub struct SealedSymmetricCipher;

impl SealedSymmetricCipher {
    pub fn new() -> Self {
        Self
    }

    /// Encrypt `plain_data` under `key` with a freshly generated nonce.
    ///
    /// # Errors
    ///
    /// Same as [`SymmetricEncryption::encrypt`].
    pub fn seal(&self, plain_data: &[u8], key: &[u8]) -> Result<SealedPayload> {
        if plain_data.is_null_or_empty() {
            return Err(EncryptionError::EmptyInput(PLAIN_DATA_EMPTY));
        }
        if key.is_null_or_empty() {
            return Err(EncryptionError::EmptyKey(KEY_EMPTY));
        }

        let cipher = GcmSiv::for_key(key)?;
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);

        let ciphertext = cipher.encrypt(&nonce, plain_data)?;
        Ok(SealedPayload { nonce, ciphertext })
    }

    /// Authenticate and decrypt `payload` under `key`.
    ///
    /// # Errors
    ///
    /// [`EncryptionError::EmptyKey`] if `key` is empty;
    /// [`EncryptionError::CryptographicFailure`] on a wrong key or tampered data.
    pub fn open(&self, payload: &SealedPayload, key: &[u8]) -> Result<Vec<u8>> {
        if key.is_null_or_empty() {
            return Err(EncryptionError::EmptyKey(KEY_EMPTY));
        }
        GcmSiv::for_key(key)?.decrypt(&payload.nonce, &payload.ciphertext)
    }
}

impl SymmetricEncryption for SealedSymmetricCipher {
    fn encrypt(&self, plain_data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        self.seal(plain_data, key).map(|sealed| sealed.to_bytes())
    }

    fn decrypt(&self, encrypted_data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        if encrypted_data.is_null_or_empty() {
            return Err(EncryptionError::EmptyInput(ENCRYPTED_DATA_EMPTY));
        }
        if key.is_null_or_empty() {
            return Err(EncryptionError::EmptyKey(KEY_EMPTY));
        }
        self.open(&SealedPayload::from_bytes(encrypted_data)?, key)
    }
}

enum GcmSiv {
    Aes128(Aes128GcmSiv),
    Aes256(Aes256GcmSiv),
}

impl GcmSiv {
    fn for_key(key: &[u8]) -> Result<Self> {
        let cipher = match key.len() {
            16 => Aes128GcmSiv::new_from_slice(key).map(GcmSiv::Aes128),
            32 => Aes256GcmSiv::new_from_slice(key).map(GcmSiv::Aes256),
            _ => {
                debug!(key_len = key.len(), "sealed cipher key rejected");
                return Err(EncryptionError::crypto(format!(
                    "invalid AES-GCM-SIV key length: expected 16 or 32 bytes, got {}",
                    key.len()
                )));
            }
        };
        cipher.map_err(|_| EncryptionError::crypto("invalid AES-GCM-SIV key"))
    }

    fn encrypt(&self, nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
        let nonce = Nonce::from_slice(nonce);
        match self {
            GcmSiv::Aes128(c) => c.encrypt(nonce, plaintext),
            GcmSiv::Aes256(c) => c.encrypt(nonce, plaintext),
        }
        .map_err(|_| EncryptionError::crypto("aead operation failed"))
    }

    fn decrypt(&self, nonce: &[u8; NONCE_LEN], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let nonce = Nonce::from_slice(nonce);
        match self {
            GcmSiv::Aes128(c) => c.decrypt(nonce, ciphertext),
            GcmSiv::Aes256(c) => c.decrypt(nonce, ciphertext),
        }
        .map_err(|_| {
            debug!(
                ciphertext_len = ciphertext.len(),
                "sealed payload failed authentication"
            );
            EncryptionError::crypto("aead operation failed")
        })
    }
}
