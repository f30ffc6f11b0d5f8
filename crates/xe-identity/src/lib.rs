//! XE proof-of-work identity — wallet primitives and challenge chains.
//!
//! Holders mint a self-contained, publicly verifiable identity by chaining
//! memory-hard proofs of work, each signed by a secp256k1 key whose
//! checksummed address names the identity. A verifier needs only the public
//! record: the chain proves that the claimed address produced every link,
//! in order, at the required computational cost.

pub mod crypto;
pub mod error;
pub mod identity;
pub mod pow;
pub mod time;
pub mod wallet;

// Re-export primary types
pub use error::{IdentityError, Result};
pub use identity::{
    generate_identity, verify_identity, verify_identity_value, Identity, PublicIdentity,
    DEFAULT_CHALLENGES,
};
pub use pow::{difficulty, meets_difficulty, mine_signature, MinedChallenge};

// Re-export the wallet operation surface
pub use wallet::{
    checksum_address_is_valid, generate_checksum_address, generate_key_pair, generate_signature,
    generate_wallet, private_key_to_checksum_address, private_key_to_public_key,
    public_key_to_checksum_address, recover_address_from_signed_message,
    recover_public_key_from_signed_message, restore_wallet_from_private_key,
    verify_signature_address, Wallet,
};
