//! Argon2id challenge seeding.
//!
//! Each challenge derives one 32-byte seed from its message and an
//! index-scoped salt. The derivation runs once per challenge, not once per
//! mining attempt: every link pays the 64 MiB memory tax exactly once and
//! the inner search stays cheap. Folding the derivation into the mining
//! loop would change the protocol and break verification.

use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::{IdentityError, Result};

/// Argon2id memory cost in KiB (64 MiB).
pub const SEED_M_COST: u32 = 65_536;

/// Argon2id time cost (iterations).
pub const SEED_T_COST: u32 = 3;

/// Argon2id parallelism lanes.
pub const SEED_P_COST: u32 = 1;

/// Seed output length in bytes.
pub const SEED_LEN: usize = 32;

/// Salt for challenge `index`: the ASCII string `xe-challenge-<index>`.
pub fn challenge_salt(index: u64) -> String {
    format!("xe-challenge-{index}")
}

/// Derive the 32-byte mining seed for a challenge message and index.
///
/// The message and salt are passed as their UTF-8 bytes; the output is the
/// raw hash, not an encoded string.
pub fn derive_challenge_seed(message: &str, index: u64) -> Result<[u8; SEED_LEN]> {
    let params = Params::new(SEED_M_COST, SEED_T_COST, SEED_P_COST, Some(SEED_LEN))
        .map_err(|e| IdentityError::SeedDerivation(format!("Argon2 params: {e}")))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let mut output = [0u8; SEED_LEN];
    argon2
        .hash_password_into(
            message.as_bytes(),
            challenge_salt(index).as_bytes(),
            &mut output,
        )
        .map_err(|e| IdentityError::SeedDerivation(format!("Argon2 hash: {e}")))?;
    Ok(output)
}

/// The seed serialized as 64 lowercase hex chars, the form every mining
/// attempt binds into its input.
pub fn derive_challenge_seed_hex(message: &str, index: u64) -> Result<String> {
    Ok(hex::encode(derive_challenge_seed(message, index)?))
}
