//! # Exchange Errors
//!
//! The four failure kinds a caller of the exchange client has to tell
//! apart, plus configuration. Lower-level errors are classified once, in
//! the `From` impls below, and never reinterpreted afterwards.

use crate::config::ConfigError;
use ex_01_authorization::AuthorizationError;
use ex_02_rpc_gateway::GatewayError;
use shared_crypto::CryptoError;
use shared_types::EncodingError;
use thiserror::Error;

/// Errors returned by [`ExchangeClient`](crate::ExchangeClient) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExchangeError {
    /// Private key is malformed or unusable
    #[error("Key error: {0}")]
    Key(CryptoError),

    /// Gateway call failed or the node rejected the request
    #[error("Remote error: {0}")]
    Remote(GatewayError),

    /// Queried resource does not exist (yet)
    #[error("Not found: {0}")]
    NotFound(String),

    /// A field or transported authorization cannot be represented
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Client configuration is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ExchangeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExchangeError::NotFound(_))
    }
}

impl From<CryptoError> for ExchangeError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidKeyLength { .. }
            | CryptoError::InvalidKeyEncoding(_)
            | CryptoError::InvalidPrivateKey
            | CryptoError::SigningFailed(_) => ExchangeError::Key(err),
            // Everything else concerns a signature someone handed us
            other => ExchangeError::Encoding(other.to_string()),
        }
    }
}

impl From<AuthorizationError> for ExchangeError {
    fn from(err: AuthorizationError) -> Self {
        match err {
            AuthorizationError::Crypto(crypto) => crypto.into(),
            other => ExchangeError::Encoding(other.to_string()),
        }
    }
}

impl From<GatewayError> for ExchangeError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound(what) => ExchangeError::NotFound(what),
            GatewayError::Signing(crypto) => crypto.into(),
            other => ExchangeError::Remote(other),
        }
    }
}

impl From<EncodingError> for ExchangeError {
    fn from(err: EncodingError) -> Self {
        ExchangeError::Encoding(err.to_string())
    }
}
