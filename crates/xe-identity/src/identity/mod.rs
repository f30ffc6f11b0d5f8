//! Identity chains — minting, extension, verification.
//!
//! An identity is a secp256k1 wallet plus an ordered chain of mined
//! challenges. The first link signs `address:timestamp`; every later link
//! signs the previous signature, so no prefix of the chain can be reused
//! under a different address, timestamp, or history.

pub mod chain;
pub mod verify;

pub use chain::{generate_identity, Identity, PublicIdentity, DEFAULT_CHALLENGES};
pub use verify::{verify_identity, verify_identity_value};
