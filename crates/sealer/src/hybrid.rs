//! Hybrid RSA-OAEP + AES-128-GCM encryption of a payload.
//!
//! One call, one blob: a fresh 128-bit session key is wrapped under the
//! recipient's RSA key, the payload is sealed under the session key, and the
//! two parts are concatenated and base64-encoded. The session key, nonce and
//! intermediate buffers never outlive the call.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes128Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rsa::rand_core::{OsRng, RngCore};
use rsa::{Oaep, RsaPublicKey};
use sha1::Sha1;

use crate::error::SealerError;
use crate::key::parse_public_key;

/// Byte length of the AES-128 session key.
pub const SESSION_KEY_LEN: usize = 16;

/// Byte length of the AES-GCM nonce (96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the AES-GCM authentication tag.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` for the holder of `public_key_pem`.
///
/// Returns a standard-alphabet, padded base64 string whose decoded bytes are
/// `wrapped_session_key || ciphertext || tag || nonce`. The wrapped-key
/// length equals the RSA modulus size; the decrypting side splits the blob
/// using that out-of-band knowledge.
///
/// # Errors
///
/// Any stage failing aborts the call with that stage's [`SealerError`];
/// no partial output is returned.
pub fn encrypt_payload(public_key_pem: &[u8], plaintext: &[u8]) -> Result<String, SealerError> {
    let public_key = parse_public_key(public_key_pem)?;

    let mut session_key = [0u8; SESSION_KEY_LEN];
    OsRng
        .try_fill_bytes(&mut session_key)
        .map_err(|e| SealerError::Entropy(e.to_string()))?;

    // SHA-1 inside OAEP is a wire-compatibility constraint: the peer
    // decrypter runs on Ruby OpenSSL, whose OAEP default is SHA-1.
    let wrapped_key = public_key
        .encrypt(&mut OsRng, Oaep::new::<Sha1>(), &session_key)
        .map_err(|e| SealerError::Wrap(e.to_string()))?;

    let sealed = seal(&session_key, plaintext)?;

    let mut blob = wrapped_key;
    blob.extend_from_slice(&sealed);
    Ok(STANDARD.encode(blob))
}

/// Seal `plaintext` under `session_key` with AES-128-GCM and no AAD.
///
/// The returned buffer is exactly `plaintext.len() + TAG_LEN + NONCE_LEN`
/// bytes: ciphertext and tag up front, the nonce in the last [`NONCE_LEN`]
/// bytes. The nonce must be unique per call but is not secret.
fn seal(session_key: &[u8; SESSION_KEY_LEN], plaintext: &[u8]) -> Result<Vec<u8>, SealerError> {
    let cipher = Aes128Gcm::new_from_slice(session_key)
        .map_err(|e| SealerError::Seal(e.to_string()))?;

    let mut buf = vec![0u8; plaintext.len() + TAG_LEN + NONCE_LEN];
    let (body, nonce_bytes) = buf.split_at_mut(plaintext.len() + TAG_LEN);
    OsRng
        .try_fill_bytes(nonce_bytes)
        .map_err(|e| SealerError::Entropy(e.to_string()))?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(nonce_bytes), plaintext)
        .map_err(|e| SealerError::Seal(e.to_string()))?;
    body.copy_from_slice(&ciphertext);

    Ok(buf)
}
