//! Cryptographic primitives for XE identities.
//!
//! This module provides:
//! - secp256k1 key generation and compact recoverable ECDSA signatures
//! - SHA-256 message digests and ASCII-text Keccak-256
//! - Argon2id memory-hard challenge seeding

pub mod hashing;
pub mod keys;
pub mod seed;
pub mod signing;
