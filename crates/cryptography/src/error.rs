//! Error taxonomy shared by every cipher service in this crate.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EncryptionError>;

/// Failure raised by an encrypt or decrypt call.
///
/// The `Display` output of the validation variants is a stable, caller-visible
/// message. [`EncryptionError::CryptographicFailure`] carries a description of
/// what the primitive rejected and never includes key or payload bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncryptionError {
    /// The plaintext or ciphertext buffer is absent or zero-length.
    #[error("{0}")]
    EmptyInput(&'static str),

    /// The key buffer is absent or zero-length.
    #[error("{0}")]
    EmptyKey(&'static str),

    /// The plaintext exceeds what the asymmetric service accepts.
    #[error("Data payload is more that {max} bytes")]
    PayloadTooLarge {
        /// Largest accepted payload, in bytes.
        max: usize,
    },

    /// The underlying primitive rejected the key encoding, the ciphertext, or
    /// the padding.
    #[error("{0}")]
    CryptographicFailure(String),
}

/// Coarse classification of an [`EncryptionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    EmptyKey,
    PayloadTooLarge,
    CryptographicFailure,
}

impl EncryptionError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncryptionError::EmptyInput(_) => ErrorKind::EmptyInput,
            EncryptionError::EmptyKey(_) => ErrorKind::EmptyKey,
            EncryptionError::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            EncryptionError::CryptographicFailure(_) => ErrorKind::CryptographicFailure,
        }
    }

    pub(crate) fn crypto(reason: impl Into<String>) -> Self {
        EncryptionError::CryptographicFailure(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_too_large_message() {
        let e = EncryptionError::PayloadTooLarge { max: 200 };
        assert_eq!(e.to_string(), "Data payload is more that 200 bytes");
    }

    #[test]
    fn validation_variants_display_their_message_verbatim() {
        assert_eq!(
            EncryptionError::EmptyInput("data is null or empty").to_string(),
            "data is null or empty"
        );
        assert_eq!(
            EncryptionError::EmptyKey("public key is null or empty").to_string(),
            "public key is null or empty"
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(EncryptionError::EmptyInput("x").kind(), ErrorKind::EmptyInput);
        assert_eq!(EncryptionError::EmptyKey("x").kind(), ErrorKind::EmptyKey);
        assert_eq!(
            EncryptionError::PayloadTooLarge { max: 1 }.kind(),
            ErrorKind::PayloadTooLarge
        );
        assert_eq!(
            EncryptionError::crypto("bad padding").kind(),
            ErrorKind::CryptographicFailure
        );
    }
}
