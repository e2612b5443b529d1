//! # Keccak-256 Hashing
//!
//! The digest the network uses for addresses, transaction hashes and
//! signable text.

use sha3::{Digest, Keccak256};

/// Keccak-256 output (256-bit).
pub type Hash = [u8; 32];

/// Prefix of the EIP-191 "personal message" envelope.
pub const TEXT_HASH_PREFIX: &str = "\x19Ethereum Signed Message:\n";

/// Hash data with Keccak-256 (one-shot).
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash multiple inputs as if concatenated.
pub fn keccak256_many(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().into()
}

/// EIP-191 text hash:
/// `keccak256("\x19Ethereum Signed Message:\n" ‖ len(data) ‖ data)`.
///
/// The length is the byte length written in decimal.
pub fn text_hash(data: &[u8]) -> Hash {
    let length = data.len().to_string();
    keccak256_many(&[TEXT_HASH_PREFIX.as_bytes(), length.as_bytes(), data])
}
