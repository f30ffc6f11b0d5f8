//! secp256k1 key pair generation.
//!
//! The private key's external form is 64 lowercase hex characters; the
//! public key's is compressed SEC1 (33 bytes, 66 hex characters with a
//! `02`/`03` prefix). `k256` zeroizes scalar material on drop.

use k256::ecdsa::{SigningKey, VerifyingKey};

use crate::error::{IdentityError, Result};

/// Length of a private key in hex characters.
pub const PRIVATE_KEY_HEX_LEN: usize = 64;

/// Length of a compressed public key in hex characters.
pub const PUBLIC_KEY_HEX_LEN: usize = 66;

/// A secp256k1 key pair for signing operations.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate a new random key pair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// Reconstruct a key pair from a private key given as 64 hex chars.
    ///
    /// Accepts either case on input; the scalar must be in `(0, n)`.
    pub fn from_private_key_hex(private_key_hex: &str) -> Result<Self> {
        if private_key_hex.len() != PRIVATE_KEY_HEX_LEN {
            return Err(IdentityError::InvalidPrivateKey(format!(
                "expected {PRIVATE_KEY_HEX_LEN} hex characters"
            )));
        }
        let bytes = hex::decode(private_key_hex)
            .map_err(|_| IdentityError::InvalidPrivateKey("not a hex string".into()))?;
        let signing_key = SigningKey::from_slice(&bytes)
            .map_err(|_| IdentityError::InvalidPrivateKey("scalar out of range".into()))?;
        Ok(Self { signing_key })
    }

    /// Return a reference to the signing key.
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// Return the verifying (public) key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Return the private key as 64 lowercase hex chars.
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.signing_key.to_bytes())
    }

    /// Return the compressed public key as 66 lowercase hex chars.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.verifying_key().to_encoded_point(true).as_bytes())
    }
}
