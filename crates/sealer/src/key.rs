//! RSA public key parsing with recovery for newline-collapsed PEM.
//!
//! Cluster public keys travel through single-line configuration fields, and
//! some tooling collapses the PEM's newlines into spaces on the way. The
//! parser first tries the bytes as-is; if that fails it strips the PEM
//! markers, turns every space in the body back into a newline, re-wraps and
//! retries.

use rsa::pkcs8::{spki, DecodePublicKey};
use rsa::RsaPublicKey;

use crate::error::SealerError;

const KEY_HEADER: &str = "-----BEGIN PUBLIC KEY-----";
const KEY_FOOTER: &str = "-----END PUBLIC KEY-----";

/// Parse raw bytes as a PEM-armored RSA public key (SubjectPublicKeyInfo).
///
/// # Errors
///
/// Returns [`SealerError::KeyDecode`] if no structurally valid PEM block can
/// be obtained, even via the space-to-newline recovery, and
/// [`SealerError::KeyAlgorithm`] if the block decodes to a non-RSA key.
pub fn parse_public_key(pubkey: &[u8]) -> Result<RsaPublicKey, SealerError> {
    let text = std::str::from_utf8(pubkey)
        .map_err(|_| SealerError::KeyDecode("key bytes are not valid UTF-8".into()))?;

    match decode_spki_pem(text) {
        Ok(key) => Ok(key),
        // The PEM itself decoded; a wrong algorithm is not repairable.
        Err(err @ SealerError::KeyAlgorithm(_)) => Err(err),
        Err(_) => decode_spki_pem(&restore_collapsed_pem(text)),
    }
}

fn decode_spki_pem(text: &str) -> Result<RsaPublicKey, SealerError> {
    RsaPublicKey::from_public_key_pem(text.trim()).map_err(|err| match err {
        spki::Error::OidUnknown { oid } => SealerError::KeyAlgorithm(oid.to_string()),
        other => SealerError::KeyDecode(other.to_string()),
    })
}

/// Undo the newline-to-space collapse: strip one header and one footer
/// marker, map every remaining space to a newline, re-wrap.
fn restore_collapsed_pem(text: &str) -> String {
    let body = text
        .replacen(KEY_HEADER, "", 1)
        .replacen(KEY_FOOTER, "", 1)
        .replace(' ', "\n");
    format!("{KEY_HEADER}{body}{KEY_FOOTER}")
}
