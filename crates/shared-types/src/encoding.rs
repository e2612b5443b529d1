//! # Field Encoding
//!
//! Canonical textual encodings for values that end up inside signable
//! messages or JSON-RPC parameters.
//!
//! | Value | Encoding | Example |
//! |-------|----------|---------|
//! | amount, block number, royalty | `0x` hex quantity, no leading zeros | `0x677` |
//! | address | `0x` + 40 lowercase hex chars | `0x00..02` |
//! | exchanger id | caller-supplied text, kept verbatim | `0x8b07...` |
//!
//! Parsing is deliberately permissive about case and leading zeros, but
//! encoding is not: `0xa` and `0x0a` are different field text and therefore
//! different messages.

use crate::entities::{Address, Hash, U256};
use crate::errors::EncodingError;

/// Encode an integer as a minimal `0x` hex quantity (`0` → `0x0`).
pub fn hex_quantity(value: u64) -> String {
    format!("0x{:x}", value)
}

/// Encode a 256-bit integer as a minimal `0x` hex quantity.
pub fn hex_quantity_u256(value: U256) -> String {
    format!("0x{:x}", value)
}

/// Decode a `0x`-prefixed hex quantity into a 256-bit integer.
///
/// Leading zeros and upper-case digits are accepted.
pub fn parse_hex_quantity(text: &str) -> Result<U256, EncodingError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .ok_or_else(|| EncodingError::InvalidHexQuantity(text.to_string()))?;

    if digits.is_empty() || digits.len() > 64 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(EncodingError::InvalidHexQuantity(text.to_string()));
    }

    U256::from_str_radix(digits, 16).map_err(|_| EncodingError::InvalidHexQuantity(text.to_string()))
}

/// Decode a `0x` hex quantity that must fit in a `u64`.
pub fn parse_hex_u64(text: &str) -> Result<u64, EncodingError> {
    let value = parse_hex_quantity(text)?;
    if value.bits() > 64 {
        return Err(EncodingError::Overflow {
            value: text.to_string(),
            bits: 64,
        });
    }
    Ok(value.low_u64())
}

/// Encode an address as full-length lowercase hex.
///
/// `H160`'s `Display` abbreviates the middle, so the `Debug` form is used.
pub fn format_address(address: &Address) -> String {
    format!("{:?}", address)
}

/// Parse a 20-byte address, with or without `0x`, any case.
pub fn parse_address(text: &str) -> Result<Address, EncodingError> {
    let bytes = decode_fixed::<20>(text).ok_or_else(|| EncodingError::InvalidAddress(text.to_string()))?;
    Ok(Address::from(bytes))
}

/// Encode a 32-byte hash as full-length lowercase hex.
pub fn format_hash(hash: &Hash) -> String {
    format!("{:?}", hash)
}

/// Parse a 32-byte hash, with or without `0x`, any case.
pub fn parse_hash(text: &str) -> Result<Hash, EncodingError> {
    let bytes = decode_fixed::<32>(text).ok_or_else(|| EncodingError::InvalidHash(text.to_string()))?;
    Ok(Hash::from(bytes))
}

/// Encode bytes as `0x`-prefixed lowercase hex.
pub fn encode_hex_bytes(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode `0x`-prefixed (or bare) hex into bytes. `"0x"` decodes to empty.
pub fn decode_hex_bytes(text: &str) -> Result<Vec<u8>, EncodingError> {
    let digits = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(digits).map_err(|e| EncodingError::InvalidHexBytes(format!("{:?}: {}", text, e)))
}

fn decode_fixed<const N: usize>(text: &str) -> Option<[u8; N]> {
    let bytes = decode_hex_bytes(text).ok()?;
    bytes.try_into().ok()
}
