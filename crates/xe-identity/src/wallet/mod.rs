//! Wallet surface — addresses, records, signing, and recovery.

pub mod address;
pub mod wallet;

pub use address::{
    checksum_address_is_valid, generate_checksum_address, public_key_to_checksum_address,
    ADDRESS_BODY_LEN, ADDRESS_PREFIX,
};
pub use wallet::{
    generate_key_pair, generate_wallet, private_key_to_checksum_address,
    private_key_to_public_key, recover_address_from_signed_message, restore_wallet_from_private_key,
    verify_signature_address, Wallet,
};

pub use crate::crypto::signing::{generate_signature, recover_public_key_from_signed_message};
