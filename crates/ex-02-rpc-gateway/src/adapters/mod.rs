//! Adapters implementing [`RpcGateway`](crate::RpcGateway).

pub mod jsonrpc;
