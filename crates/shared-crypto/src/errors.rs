//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Private key text is not hex
    #[error("Invalid private key encoding: {0}")]
    InvalidKeyEncoding(String),

    /// Private key is zero or not below the curve order
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Signing primitive failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// Invalid signature format
    #[error("Invalid signature format: {0}")]
    InvalidSignatureFormat(String),

    /// Recovery byte outside 0, 1, 27, 28
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Public key could not be recovered from the signature
    #[error("Failed to recover public key")]
    RecoveryFailed,
}
