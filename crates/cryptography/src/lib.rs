//! Encryption boundary for `onion-router`.
//!
//! Two stateless services sit behind this crate:
//!
//! - [`SymmetricEncryption`]: arbitrary-length payloads under a shared secret.
//!   [`DeterministicSymmetricCipher`] is AES-ECB with PKCS#7 padding and is
//!   bit-for-bit compatible with ciphertext produced by other nodes.
//!   [`SealedSymmetricCipher`] is the nonce-based AES-GCM-SIV alternative for
//!   payloads that never need to interoperate with the deterministic scheme.
//! - [`AsymmetricEncryption`]: payloads of at most [`MAX_PAYLOAD_LEN`] bytes
//!   under an RSA key pair with OAEP-SHA256 padding.
//!
//! Every call validates its buffers before any cryptographic work starts and
//! reports failures through [`EncryptionError`]. No call retains key material
//! or payload bytes after returning.

pub mod asymmetric;
pub mod error;
pub mod sealed;
pub mod symmetric;

pub use asymmetric::{AsymmetricCipher, AsymmetricEncryption, MAX_PAYLOAD_LEN};
pub use error::{EncryptionError, ErrorKind, Result};
pub use sealed::{SealedPayload, SealedSymmetricCipher};
pub use symmetric::{DeterministicSymmetricCipher, SymmetricEncryption};
