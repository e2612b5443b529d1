//! Ports for the RPC gateway.

pub mod outbound;
