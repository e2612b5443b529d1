//! # Exchange Dispatch (EX-03)
//!
//! [`ExchangeClient`] exposes one async operation per wormholes action.
//! Each operation gathers what it needs from the node, builds the payload
//! (signing role messages where the caller is a party), wraps it in a
//! legacy transaction signed by the caller's key and submits it.
//!
//! ```text
//! caller ─▶ ExchangeClient ─▶ RpcGateway (chain id, nonce, gas price)
//!                │
//!                ├─▶ Wallet (role signatures, deadlines from block height)
//!                ├─▶ WormholesPayload (embeds other parties' authorizations)
//!                └─▶ LegacyTransaction ─▶ RpcGateway (eth_sendRawTransaction) ─▶ tx hash
//! ```
//!
//! Errors are reported with [`ExchangeError`]; nothing is retried.

pub mod config;
pub mod errors;
pub mod service;

// Re-export public API
pub use config::{ClientConfig, ConfigError};
pub use errors::ExchangeError;
pub use service::nft::OfficialNftBatch;
pub use service::ExchangeClient;
