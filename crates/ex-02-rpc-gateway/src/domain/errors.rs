//! # Gateway Errors

use thiserror::Error;

/// Errors surfaced by [`RpcGateway`](crate::RpcGateway) calls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The node answered with a JSON-RPC error object
    #[error("{method} rejected by node ({code}): {message}")]
    Rpc {
        method: String,
        code: i32,
        message: String,
    },

    /// Connection, HTTP or timeout failure before a node answer arrived
    #[error("{method} transport failure: {reason}")]
    Transport { method: String, reason: String },

    /// The node answered `null` for a resource that does not exist yet
    #[error("{0} not found")]
    NotFound(String),

    /// The node's answer did not have the expected shape
    #[error("{method} returned an undecodable result: {reason}")]
    Decode { method: String, reason: String },

    /// A transaction could not be signed for submission
    #[error("Transaction signing failed: {0}")]
    Signing(#[from] shared_crypto::CryptoError),
}

impl GatewayError {
    pub fn decode(method: &str, reason: impl ToString) -> Self {
        GatewayError::Decode {
            method: method.to_string(),
            reason: reason.to_string(),
        }
    }
}
