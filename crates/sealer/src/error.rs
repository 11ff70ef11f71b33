//! Error types produced by the sealer.

use thiserror::Error;

/// Errors produced while encrypting a payload.
///
/// Every stage fails fast: the first error aborts the whole call and no
/// partial output is ever returned.
#[derive(Debug, Error)]
pub enum SealerError {
    /// The public key PEM could not be decoded, even after the
    /// collapsed-newline recovery attempt.
    #[error("invalid public key: {0}")]
    KeyDecode(String),

    /// The PEM decoded cleanly but the key inside is not an RSA key.
    #[error("not an RSA public key (algorithm {0})")]
    KeyAlgorithm(String),

    /// The OS secure random source failed to produce bytes.
    #[error("secure random source unavailable: {0}")]
    Entropy(String),

    /// RSA-OAEP encryption of the session key failed.
    #[error("session key wrap failed: {0}")]
    Wrap(String),

    /// AES-GCM cipher construction or sealing failed.
    #[error("payload seal failed: {0}")]
    Seal(String),
}
