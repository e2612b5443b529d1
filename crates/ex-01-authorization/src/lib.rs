//! # Exchange Authorization (EX-01)
//!
//! Builds the byte-exact messages each exchange role signs, signs them with
//! an account key and packages the result into transportable role
//! authorizations that a counter-party can combine into one transaction.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): role schemas, canonical message building,
//!   authorization and composite payload types. Pure, no I/O.
//! - **Wallet** (`wallet.rs`): holds one key and signs role messages.
//!
//! ## Signed vs. transported form
//!
//! The signed form of a role is positional: its fields concatenated in
//! schema order with no delimiter, then text-hashed. The transported form is
//! key-value JSON, so the party that combines several authorizations never
//! needs to know field order.
//!
//! ```text
//! BuyerMessage ──ordered_fields()──▶ SignableMessage ──digest()──▶ [u8; 32]
//!      │                                                          │
//!      └────────────── RoleAuthorization { ..fields, sig } ◀──sign┘
//! ```

pub mod domain;
pub mod wallet;

// Re-export public API
pub use domain::action::ActionKind;
pub use domain::authorization::RoleAuthorization;
pub use domain::composite::{TransactionIntent, WormholesPayload, PAYLOAD_PREFIX, PAYLOAD_VERSION};
pub use domain::errors::AuthorizationError;
pub use domain::message::{RoleKind, SignableMessage};
pub use domain::roles::{
    BuyerAuthMessage, BuyerMessage, DelegateMessage, ExchangerAuthMessage, RoleMessage,
    Seller1Message, Seller2Message, SellerAuthMessage,
};
pub use wallet::Wallet;
