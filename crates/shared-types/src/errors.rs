//! # Error Types
//!
//! Encoding errors shared by every crate that turns values into field text.

use thiserror::Error;

/// A value could not be represented in (or decoded from) its expected
/// textual encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Hex quantity was empty, lacked digits or contained non-hex characters.
    #[error("Invalid hex quantity: {0:?}")]
    InvalidHexQuantity(String),

    /// Quantity does not fit in the target integer width.
    #[error("Quantity overflows {bits}-bit integer: {value}")]
    Overflow { value: String, bits: u32 },

    /// Address text was not 20 bytes of hex.
    #[error("Invalid address: {0:?}")]
    InvalidAddress(String),

    /// Hash text was not 32 bytes of hex.
    #[error("Invalid hash: {0:?}")]
    InvalidHash(String),

    /// Arbitrary hex byte string could not be decoded.
    #[error("Invalid hex bytes: {0}")]
    InvalidHexBytes(String),
}
