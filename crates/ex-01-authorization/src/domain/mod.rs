//! # Domain Layer
//!
//! Role schemas, canonical messages and the authorization payload shapes.
//! Nothing here performs I/O or holds key material.

pub mod action;
pub mod authorization;
pub mod composite;
pub mod errors;
pub mod message;
pub mod roles;
