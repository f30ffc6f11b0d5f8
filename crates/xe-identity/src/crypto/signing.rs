//! Compact recoverable ECDSA signatures over secp256k1.
//!
//! The wire form is `r || s || v` as exactly 130 lowercase hex characters:
//! 32-byte big-endian `r` and `s` with `s` in the lower half of the group
//! order, and the recovery parameter `v` as two hex digits. The message is
//! digested with SHA-256 and the digest signed as a prehash.

use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

use crate::crypto::hashing::sha256_digest;
use crate::crypto::keys::Secp256k1KeyPair;
use crate::error::{IdentityError, Result};

/// Exact length of a serialized signature in hex characters.
pub const SIGNATURE_HEX_LEN: usize = 130;

/// Sign `message` with a private key given as 64 hex chars.
pub fn generate_signature(private_key_hex: &str, message: &str) -> Result<String> {
    let key_pair = Secp256k1KeyPair::from_private_key_hex(private_key_hex)?;
    sign_with_key(key_pair.signing_key(), message)
}

/// Sign with an already-parsed signing key.
///
/// The miner calls this in its inner loop to avoid re-parsing the scalar
/// on every attempt.
pub fn sign_with_key(signing_key: &SigningKey, message: &str) -> Result<String> {
    let digest = sha256_digest(message);
    let (signature, recovery_id) = signing_key
        .sign_prehash_recoverable(&digest)
        .map_err(|_| IdentityError::SigningFailed)?;
    Ok(format!(
        "{}{:02x}",
        hex::encode(signature.to_bytes()),
        recovery_id.to_byte()
    ))
}

/// Recover the compressed public key (66 hex chars) that signed `message`.
pub fn recover_public_key_from_signed_message(message: &str, signature: &str) -> Result<String> {
    let (sig, recovery_id) = parse_signature(signature)?;
    let digest = sha256_digest(message);
    let verifying_key = VerifyingKey::recover_from_prehash(&digest, &sig, recovery_id)
        .map_err(|_| IdentityError::RecoveryFailed)?;
    Ok(hex::encode(verifying_key.to_encoded_point(true).as_bytes()))
}

/// Parse and validate the compact wire form.
///
/// Rejects anything that is not 130 lowercase hex characters, a
/// non-canonical (high-s) scalar pair, or a recovery parameter outside
/// `{0, 1}`.
fn parse_signature(signature: &str) -> Result<(Signature, RecoveryId)> {
    if signature.len() != SIGNATURE_HEX_LEN || !is_lowercase_hex(signature) {
        return Err(IdentityError::MalformedSignature(
            "expected 130 lowercase hex characters".into(),
        ));
    }
    let rs = hex::decode(&signature[..128])
        .map_err(|_| IdentityError::MalformedSignature("not a hex string".into()))?;
    let sig = Signature::from_slice(&rs)
        .map_err(|_| IdentityError::MalformedSignature("r/s out of range".into()))?;
    if sig.normalize_s().is_some() {
        return Err(IdentityError::MalformedSignature("non-canonical s".into()));
    }
    let v = u8::from_str_radix(&signature[128..], 16)
        .map_err(|_| IdentityError::MalformedSignature("invalid recovery parameter".into()))?;
    if v > 1 {
        return Err(IdentityError::MalformedSignature(
            "recovery parameter must be 0 or 1".into(),
        ));
    }
    let recovery_id = RecoveryId::from_byte(v)
        .ok_or_else(|| IdentityError::MalformedSignature("invalid recovery parameter".into()))?;
    Ok((sig, recovery_id))
}

pub(crate) fn is_lowercase_hex(text: &str) -> bool {
    text.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
