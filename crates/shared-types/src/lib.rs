//! # Shared Types Crate
//!
//! Chain primitives and wire encodings shared by every crate of the
//! exchange client.
//!
//! ## Design Principles
//!
//! - **Strings on the signing path**: message fields are carried as the
//!   exact text that gets hashed. Numeric types only appear at the edges,
//!   where [`encoding`] turns them into canonical hex quantities.
//! - **Node shapes live here**: receipts, account state and validator
//!   listings are decoded once and reused by the gateway and the dispatch
//!   layer.

pub mod chain;
pub mod encoding;
pub mod entities;
pub mod errors;

pub use chain::*;
pub use entities::*;
pub use errors::*;
