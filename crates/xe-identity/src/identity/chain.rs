//! Identity minting and extension.

use serde::{Deserialize, Serialize, Serializer};
use zeroize::Zeroize;

use crate::crypto::keys::Secp256k1KeyPair;
use crate::error::{IdentityError, Result};
use crate::pow::{difficulty, mine_with_key};
use crate::wallet::{generate_wallet, private_key_to_checksum_address};

/// Default number of challenges minted by [`generate_identity`].
pub const DEFAULT_CHALLENGES: usize = 10;

/// The shareable identity record.
///
/// Serializes as exactly the four keys `address`, `timestamp`, `s`, `c`;
/// unknown keys in incoming documents are ignored. Never contains key
/// material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicIdentity {
    /// Checksummed address naming the identity.
    pub address: String,
    /// Mint time, milliseconds since Unix epoch.
    pub timestamp: u64,
    /// Challenge signatures, oldest first.
    pub s: Vec<String>,
    /// Solution counters, index-aligned with `s`.
    pub c: Vec<u64>,
}

/// An identity with its private key retained.
///
/// The key never serializes: `Serialize` emits the public view only, and
/// the hex scalar is zeroized on drop. The only permitted mutation is
/// appending one mined link at a time.
pub struct Identity {
    private_key: String,
    address: String,
    timestamp: u64,
    s: Vec<String>,
    c: Vec<u64>,
}

impl Identity {
    /// Reconstruct an identity from its private key and public record,
    /// e.g. to extend a chain minted elsewhere.
    ///
    /// Fails if the key does not derive the record's address or the
    /// record's chains disagree in length.
    pub fn from_parts(private_key_hex: &str, record: PublicIdentity) -> Result<Self> {
        let derived = private_key_to_checksum_address(private_key_hex)?;
        if derived != record.address {
            return Err(IdentityError::InvalidPrivateKey(
                "key does not derive the identity address".into(),
            ));
        }
        if record.s.len() != record.c.len() {
            return Err(IdentityError::CorruptChain);
        }
        Ok(Self {
            private_key: private_key_hex.to_ascii_lowercase(),
            address: record.address,
            timestamp: record.timestamp,
            s: record.s,
            c: record.c,
        })
    }

    /// The checksummed address naming this identity.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Mint time, milliseconds since Unix epoch.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Challenge signatures, oldest first.
    pub fn signatures(&self) -> &[String] {
        &self.s
    }

    /// Solution counters, index-aligned with [`Self::signatures`].
    pub fn solutions(&self) -> &[u64] {
        &self.c
    }

    /// Explicit private key accessor; the only way the key leaves the
    /// identity.
    pub fn get_private_key(&self) -> &str {
        &self.private_key
    }

    /// Deep copy of the shareable record.
    pub fn get_public_identity(&self) -> PublicIdentity {
        PublicIdentity {
            address: self.address.clone(),
            timestamp: self.timestamp,
            s: self.s.clone(),
            c: self.c.clone(),
        }
    }

    /// Mine and append the next challenge link.
    ///
    /// The link is staged locally and appended only after mining succeeds;
    /// a failed or abandoned call leaves the chains untouched.
    pub fn add_challenge(&mut self) -> Result<&mut Self> {
        if self.s.len() != self.c.len() {
            return Err(IdentityError::CorruptChain);
        }
        let index = self.s.len() as u64;
        let message =
            challenge_message(&self.address, self.timestamp, self.s.last().map(String::as_str));
        let key_pair = Secp256k1KeyPair::from_private_key_hex(&self.private_key)?;
        let mined = mine_with_key(&key_pair, &message, difficulty(index), index)?;
        self.s.push(mined.signature);
        self.c.push(mined.solution);
        Ok(self)
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.get_public_identity().serialize(serializer)
    }
}

impl Drop for Identity {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

/// The message signed by challenge `i`: `address:timestamp` for the
/// genesis link, the previous signature for every later link.
pub(crate) fn challenge_message(
    address: &str,
    timestamp: u64,
    previous_signature: Option<&str>,
) -> String {
    match previous_signature {
        Some(signature) => signature.to_string(),
        None => format!("{address}:{timestamp}"),
    }
}

/// Mint a fresh identity with `challenges` chained proofs of work.
///
/// `challenges` must be at least 1; [`DEFAULT_CHALLENGES`] is the usual
/// choice.
pub fn generate_identity(challenges: usize) -> Result<Identity> {
    if challenges == 0 {
        return Err(IdentityError::NoChallenges);
    }
    let wallet = generate_wallet();
    let key_pair = Secp256k1KeyPair::from_private_key_hex(wallet.private_key())?;
    let timestamp = crate::time::now_millis();
    let mut identity = Identity {
        private_key: wallet.private_key().to_string(),
        address: wallet.address().to_string(),
        timestamp,
        s: Vec::with_capacity(challenges),
        c: Vec::with_capacity(challenges),
    };
    for index in 0..challenges as u64 {
        let message = challenge_message(
            &identity.address,
            timestamp,
            identity.s.last().map(String::as_str),
        );
        let mined = mine_with_key(&key_pair, &message, difficulty(index), index)?;
        identity.s.push(mined.signature);
        identity.c.push(mined.solution);
    }
    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_identity_shape() {
        let identity = generate_identity(1).unwrap();
        assert_eq!(identity.signatures().len(), 1);
        assert_eq!(identity.solutions().len(), 1);
        assert!(identity.signatures()[0].starts_with("00"));
        assert!(crate::wallet::checksum_address_is_valid(identity.address()));
    }

    #[test]
    fn test_generate_identity_rejects_zero() {
        assert!(matches!(
            generate_identity(0),
            Err(IdentityError::NoChallenges)
        ));
    }

    #[test]
    fn test_challenge_message_rule() {
        assert_eq!(
            challenge_message("xe_ab", 1700000000000, None),
            "xe_ab:1700000000000"
        );
        assert_eq!(challenge_message("xe_ab", 1700000000000, Some("00ff")), "00ff");
    }

    #[test]
    fn test_public_identity_deep_copy() {
        let identity = generate_identity(1).unwrap();
        let mut public = identity.get_public_identity();
        public.s[0] = "tampered".into();
        assert_ne!(identity.signatures()[0], public.s[0]);
    }

    #[test]
    fn test_serialization_has_no_key_material() {
        let identity = generate_identity(1).unwrap();
        let json = serde_json::to_value(&identity).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for key in ["address", "timestamp", "s", "c"] {
            assert!(keys.contains(&key));
        }
        let text = json.to_string();
        assert!(!text.contains(identity.get_private_key()));
    }

    #[test]
    fn test_from_parts_roundtrip() {
        let identity = generate_identity(1).unwrap();
        let rebuilt = Identity::from_parts(
            identity.get_private_key(),
            identity.get_public_identity(),
        )
        .unwrap();
        assert_eq!(rebuilt.address(), identity.address());
        assert_eq!(rebuilt.signatures(), identity.signatures());
    }

    #[test]
    fn test_from_parts_rejects_foreign_key() {
        let identity = generate_identity(1).unwrap();
        let other = crate::wallet::generate_wallet();
        assert!(Identity::from_parts(other.private_key(), identity.get_public_identity()).is_err());
    }

    #[test]
    fn test_from_parts_rejects_length_mismatch() {
        let identity = generate_identity(1).unwrap();
        let mut record = identity.get_public_identity();
        record.c.push(7);
        assert!(matches!(
            Identity::from_parts(identity.get_private_key(), record),
            Err(IdentityError::CorruptChain)
        ));
    }
}
