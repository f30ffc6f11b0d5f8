//! Wallet records and key conversions.

use zeroize::Zeroize;

use crate::crypto::keys::Secp256k1KeyPair;
use crate::crypto::signing::recover_public_key_from_signed_message;
use crate::error::Result;

use super::address::{derive_address, public_key_to_checksum_address};

/// A wallet: private key, compressed public key, and checksummed address,
/// all in their textual wire forms.
///
/// The private key is held behind an accessor and zeroized on drop. The
/// record deliberately does not implement `Serialize`.
pub struct Wallet {
    private_key: String,
    public_key: String,
    address: String,
}

impl Wallet {
    fn from_key_pair(key_pair: &Secp256k1KeyPair) -> Self {
        let public_key = key_pair.public_key_hex();
        let address = derive_address(&public_key);
        Self {
            private_key: key_pair.private_key_hex(),
            public_key,
            address,
        }
    }

    /// The private key as 64 lowercase hex chars.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// The compressed public key as 66 lowercase hex chars.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// The checksummed address.
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Drop for Wallet {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

/// Generate a fresh random key pair.
pub fn generate_key_pair() -> Secp256k1KeyPair {
    Secp256k1KeyPair::generate()
}

/// Generate a fresh wallet.
pub fn generate_wallet() -> Wallet {
    Wallet::from_key_pair(&Secp256k1KeyPair::generate())
}

/// Rebuild the wallet record for an existing private key.
pub fn restore_wallet_from_private_key(private_key_hex: &str) -> Result<Wallet> {
    let key_pair = Secp256k1KeyPair::from_private_key_hex(private_key_hex)?;
    Ok(Wallet::from_key_pair(&key_pair))
}

/// Derive the compressed public key for a private key.
pub fn private_key_to_public_key(private_key_hex: &str) -> Result<String> {
    Ok(Secp256k1KeyPair::from_private_key_hex(private_key_hex)?.public_key_hex())
}

/// Derive the checksummed address for a private key.
pub fn private_key_to_checksum_address(private_key_hex: &str) -> Result<String> {
    let key_pair = Secp256k1KeyPair::from_private_key_hex(private_key_hex)?;
    Ok(derive_address(&key_pair.public_key_hex()))
}

/// Recover the checksummed address that signed `message`.
pub fn recover_address_from_signed_message(message: &str, signature: &str) -> Result<String> {
    let public_key = recover_public_key_from_signed_message(message, signature)?;
    public_key_to_checksum_address(&public_key)
}

/// True iff `signature` over `message` recovers exactly `address`.
///
/// Case-sensitive comparison; any malformed input is `false`, never an
/// error.
pub fn verify_signature_address(message: &str, signature: &str, address: &str) -> bool {
    recover_address_from_signed_message(message, signature)
        .map(|recovered| recovered == address)
        .unwrap_or(false)
}
