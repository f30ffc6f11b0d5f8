//! XE address derivation and the capitalization checksum.
//!
//! An address is `xe_` plus the last 40 hex chars of the Keccak-256 of the
//! compressed public key's ASCII hex form. The case of each alphabetic
//! body character encodes a checksum: a character is uppercased iff the
//! matching hex digit of Keccak-256 over the lowercase body is >= 8.
//! Equality between addresses is case-sensitive.

use crate::crypto::hashing::keccak256_hex;
use crate::error::{IdentityError, Result};

/// Textual address prefix.
pub const ADDRESS_PREFIX: &str = "xe_";

/// Hex characters in an address body.
pub const ADDRESS_BODY_LEN: usize = 40;

/// Recompute the capitalization checksum of an address given in any case.
pub fn generate_checksum_address(address: &str) -> Result<String> {
    if !is_address_shaped(address) {
        return Err(IdentityError::InvalidAddress(address.to_string()));
    }
    let body = address[ADDRESS_PREFIX.len()..].to_ascii_lowercase();
    Ok(format!("{ADDRESS_PREFIX}{}", checksum_body(&body)))
}

/// Derive the checksummed address for a compressed public key given as 66
/// lowercase hex chars.
pub fn public_key_to_checksum_address(public_key_hex: &str) -> Result<String> {
    if !is_public_key_shaped(public_key_hex) {
        return Err(IdentityError::InvalidPublicKey(
            "expected 66 lowercase hex characters with a 02/03 prefix".into(),
        ));
    }
    Ok(derive_address(public_key_hex))
}

/// True iff `address` has a valid shape and its case pattern matches the
/// recomputed checksum exactly.
pub fn checksum_address_is_valid(address: &str) -> bool {
    is_address_shaped(address)
        && generate_checksum_address(address)
            .map(|checksummed| checksummed == address)
            .unwrap_or(false)
}

/// Derivation without shape validation, for keys this crate produced.
pub(crate) fn derive_address(public_key_hex: &str) -> String {
    // Keccak over the ASCII hex characters of the key, never decoded bytes
    let hash = keccak256_hex(public_key_hex);
    let body = &hash[hash.len() - ADDRESS_BODY_LEN..];
    format!("{ADDRESS_PREFIX}{}", checksum_body(body))
}

fn checksum_body(body: &str) -> String {
    let hash = keccak256_hex(body);
    body.chars()
        .zip(hash.chars())
        .map(|(c, h)| {
            if h.to_digit(16).unwrap_or(0) >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

fn is_address_shaped(address: &str) -> bool {
    match address.strip_prefix(ADDRESS_PREFIX) {
        Some(body) => {
            body.len() == ADDRESS_BODY_LEN && body.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

fn is_public_key_shaped(public_key_hex: &str) -> bool {
    public_key_hex.len() == 66
        && (public_key_hex.starts_with("02") || public_key_hex.starts_with("03"))
        && public_key_hex
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
