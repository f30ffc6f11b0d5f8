//! Chain verification.
//!
//! Verification is a total predicate: every structural defect, decode
//! failure, or primitive error folds into a `false` verdict. It never
//! panics and never propagates an error to the caller.

use serde_json::Value;

use crate::crypto::seed::derive_challenge_seed_hex;
use crate::crypto::signing::{is_lowercase_hex, SIGNATURE_HEX_LEN};
use crate::pow::{difficulty, meets_difficulty};
use crate::wallet::{checksum_address_is_valid, verify_signature_address};

use super::chain::{challenge_message, PublicIdentity};

/// Verify a public identity against its claimed address.
///
/// Checks, in order: the address checksum, the chain shape, each link's
/// difficulty prefix, and each link's signature. The signature check
/// recomputes the Argon2id seed and binds every link to the genesis
/// message or the previous signature.
pub fn verify_identity(identity: &PublicIdentity) -> bool {
    if !checksum_address_is_valid(&identity.address) {
        return false;
    }
    if identity.s.is_empty() || identity.s.len() != identity.c.len() {
        return false;
    }
    if !identity.s.iter().all(|s| is_signature_shaped(s)) {
        return false;
    }

    let mut previous: Option<&str> = None;
    for (index, (signature, &solution)) in identity.s.iter().zip(&identity.c).enumerate() {
        let index = index as u64;
        if !meets_difficulty(signature, difficulty(index)) {
            return false;
        }
        let message = challenge_message(&identity.address, identity.timestamp, previous);
        let seed_hex = match derive_challenge_seed_hex(&message, index) {
            Ok(seed_hex) => seed_hex,
            Err(_) => return false,
        };
        let input = format!("{seed_hex}{solution}");
        if !verify_signature_address(&input, signature, &identity.address) {
            return false;
        }
        previous = Some(signature);
    }
    true
}

/// Verify an identity presented as arbitrary JSON.
///
/// Any document that does not decode to a well-formed record (missing
/// fields, non-array chains, negative or fractional solutions, a
/// non-integer timestamp) is simply invalid. Unknown keys are ignored.
pub fn verify_identity_value(value: &Value) -> bool {
    match serde_json::from_value::<PublicIdentity>(value.clone()) {
        Ok(identity) => verify_identity(&identity),
        Err(_) => false,
    }
}

fn is_signature_shaped(signature: &str) -> bool {
    signature.len() == SIGNATURE_HEX_LEN && is_lowercase_hex(signature)
}
