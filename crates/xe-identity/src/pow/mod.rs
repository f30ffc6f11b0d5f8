//! Proof of work over recoverable signatures.

pub mod difficulty;
pub mod miner;

pub use difficulty::{difficulty, meets_difficulty, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use miner::{mine_signature, mine_with_key, MinedChallenge};
