//! Hybrid payload encryption for cluster workers.
//!
//! A fresh AES-128 session key is wrapped with the cluster's RSA public key
//! (OAEP, SHA-1) and the payload is sealed with AES-128-GCM under that
//! session key. The result is one base64 string a worker can decrypt with
//! the matching private key, whatever the payload size.
//!
//! # Blob layout
//!
//! ```text
//! base64( rsa_oaep_sha1(session_key) || ciphertext || tag:16 || nonce:12 )
//! ```
//!
//! There is no delimiter between the wrapped key and the sealed payload: the
//! decrypting side derives the wrapped-key length from its RSA modulus size.

pub mod error;
pub mod hybrid;
pub mod key;
#[cfg(test)]
mod testkeys;

pub use error::SealerError;
pub use hybrid::{encrypt_payload, NONCE_LEN, SESSION_KEY_LEN, TAG_LEN};
pub use key::parse_public_key;
