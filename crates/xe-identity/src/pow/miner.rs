//! Signature mining.
//!
//! A mined challenge is a signature whose hex form starts with the
//! required number of `'0'` characters. The Argon2id seed is derived once
//! per challenge; the loop varies only the solution counter appended to
//! the seed's hex form, so it works unchanged with a deterministic
//! RFC 6979 signer.

use serde::{Deserialize, Serialize};

use crate::crypto::keys::Secp256k1KeyPair;
use crate::crypto::seed::derive_challenge_seed_hex;
use crate::crypto::signing::sign_with_key;
use crate::error::Result;

use super::difficulty::meets_difficulty;

/// A solved challenge: the qualifying signature and the counter value
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinedChallenge {
    pub signature: String,
    pub solution: u64,
}

/// Mine a signature over `message` at `difficulty` leading zero hex chars.
///
/// The search is unbounded; expected attempts are `16^difficulty`.
pub fn mine_signature(
    private_key_hex: &str,
    message: &str,
    difficulty: u32,
    challenge_index: u64,
) -> Result<MinedChallenge> {
    let key_pair = Secp256k1KeyPair::from_private_key_hex(private_key_hex)?;
    mine_with_key(&key_pair, message, difficulty, challenge_index)
}

/// Mine with an already-parsed key pair.
pub fn mine_with_key(
    key_pair: &Secp256k1KeyPair,
    message: &str,
    difficulty: u32,
    challenge_index: u64,
) -> Result<MinedChallenge> {
    let seed_hex = derive_challenge_seed_hex(message, challenge_index)?;
    let mut solution: u64 = 0;
    loop {
        let input = format!("{seed_hex}{solution}");
        let signature = sign_with_key(key_pair.signing_key(), &input)?;
        if meets_difficulty(&signature, difficulty) {
            return Ok(MinedChallenge {
                signature,
                solution,
            });
        }
        solution += 1;
    }
}
