//! # Domain Layer
//!
//! Gateway error taxonomy and the transaction envelope. No I/O.

pub mod envelope;
pub mod errors;
