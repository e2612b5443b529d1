//! # ERB Exchange Test Suite
//!
//! Cross-crate scenarios: several parties, each with its own
//! `ExchangeClient`, signing for one another and settling through one
//! shared simulated node.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── node.rs          # In-memory chain that validates what it is sent
//!     ├── trade_flows.rs   # Multi-party trades end to end
//!     └── properties.rs    # Signing and composition guarantees
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ex-tests
//! cargo test -p ex-tests integration::trade_flows::
//! ```
