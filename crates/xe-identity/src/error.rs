//! Error types for the XE identity crate.
//!
//! Generation and wallet operations fail loudly through `Result`.
//! Chain verification never propagates these errors; it folds every
//! failure into a `false` verdict. Private key material is never included
//! in error messages.

/// Identity error types covering wallet, mining, and chain operations.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Malformed signature: {0}")]
    MalformedSignature(String),

    #[error("Signing failed")]
    SigningFailed,

    #[error("Public key recovery failed")]
    RecoveryFailed,

    #[error("Seed derivation failed: {0}")]
    SeedDerivation(String),

    #[error("Identity chain is corrupt")]
    CorruptChain,

    #[error("Challenge count must be at least 1")]
    NoChallenges,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, IdentityError>;
