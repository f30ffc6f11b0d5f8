//! SHA-256 and Keccak-256 helpers.
//!
//! Keccak-256 is always invoked over the ASCII text of its input. Address
//! derivation hashes hex *characters*, never decoded bytes; changing this
//! changes every derived address.

use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// SHA-256 of a message string's UTF-8 bytes.
pub fn sha256_digest(message: &str) -> [u8; 32] {
    Sha256::digest(message.as_bytes()).into()
}

/// SHA-256 of a message string, serialized as 64 lowercase hex chars.
pub fn sha256_hex(message: &str) -> String {
    hex::encode(sha256_digest(message))
}

/// Keccak-256 over the ASCII text of `input`, as 64 lowercase hex chars.
pub fn keccak256_hex(input: &str) -> String {
    hex::encode(Keccak256::digest(input.as_bytes()))
}
