//! # Authorization Errors
//!
//! Error types for message building, signing and payload assembly.

use crate::domain::message::RoleKind;
use shared_crypto::CryptoError;
use shared_types::Address;
use thiserror::Error;

/// Errors that can occur while building, signing or combining authorizations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorizationError {
    /// Key or signature primitive failure
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Field tuple length does not match the role's schema
    #[error("Role {role} expects {expected} fields, got {actual}")]
    FieldCount {
        role: RoleKind,
        expected: usize,
        actual: usize,
    },

    /// A transported authorization or payload could not be parsed or produced
    #[error("Malformed JSON: {0}")]
    Json(String),

    /// Transaction data does not start with the payload prefix
    #[error("Transaction data is not a wormholes payload")]
    MissingPrefix,

    /// Recovered signer is not the expected account
    #[error("Signer mismatch: expected {expected:?}, got {actual:?}")]
    SignerMismatch { expected: Address, actual: Address },

    /// Payload lacks a role authorization its action kind embeds
    #[error("{action} requires a {role} authorization")]
    MissingRole { action: &'static str, role: RoleKind },

    /// Payload carries a role authorization its action kind does not embed
    #[error("{action} does not take a {role} authorization")]
    UnexpectedRole { action: &'static str, role: RoleKind },

    /// Action is a plain transfer and has no payload
    #[error("{action} carries no exchange payload")]
    NoPayload { action: &'static str },

    /// Type code is not a known action kind
    #[error("Unknown action type code: {0}")]
    UnknownActionType(u8),
}

impl From<serde_json::Error> for AuthorizationError {
    fn from(err: serde_json::Error) -> Self {
        AuthorizationError::Json(err.to_string())
    }
}
