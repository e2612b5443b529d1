//! # RPC Gateway (EX-02)
//!
//! The narrow interface the exchange client uses to reach a node.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): gateway errors and the legacy
//!   transaction envelope (RLP, EIP-155 signing).
//! - **Ports Layer** (`ports/`): the [`RpcGateway`] trait. One required
//!   method, `invoke`; every chain query is a provided method on top of it,
//!   so a test double only has to script raw JSON answers.
//! - **Adapters Layer** (`adapters/`): [`JsonRpcGateway`] over `jsonrpsee`'s
//!   HTTP client.

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-export public API
pub use adapters::jsonrpc::JsonRpcGateway;
pub use domain::envelope::{LegacyTransaction, RpcTransaction, SignedTransaction};
pub use domain::errors::GatewayError;
pub use ports::outbound::RpcGateway;
