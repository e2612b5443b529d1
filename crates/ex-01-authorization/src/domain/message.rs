//! # Canonical Message Builder
//!
//! A role's signable message is its field strings concatenated in schema
//! order with no delimiter. The digest is the network text hash of those
//! bytes (`keccak256("\x19Ethereum Signed Message:\n" ‖ len ‖ msg)`).
//!
//! Fields are opaque text. Nothing is trimmed, padded, re-cased or
//! validated: `0xa` and `0x0a` are different messages, and an empty field
//! contributes zero bytes but is never dropped from the tuple.

use crate::domain::errors::AuthorizationError;
use serde::{Deserialize, Serialize};
use shared_crypto::{text_hash, Hash};
use std::fmt;

/// Closed set of signing roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKind {
    Buyer,
    /// Seller of an already-minted NFT
    Seller1,
    /// Seller of a not-yet-minted (lazy) NFT
    Seller2,
    ExchangerAuth,
    BuyerAuth,
    SellerAuth,
    Delegate,
}

impl RoleKind {
    pub const ALL: [RoleKind; 7] = [
        RoleKind::Buyer,
        RoleKind::Seller1,
        RoleKind::Seller2,
        RoleKind::ExchangerAuth,
        RoleKind::BuyerAuth,
        RoleKind::SellerAuth,
        RoleKind::Delegate,
    ];

    /// Ordered field names. The order is the protocol contract.
    pub const fn schema(&self) -> &'static [&'static str] {
        match self {
            RoleKind::Buyer => &["amount", "nft_address", "exchanger", "block_number", "seller"],
            RoleKind::Seller1 => &["amount", "nft_address", "exchanger", "block_number"],
            RoleKind::Seller2 => &[
                "amount",
                "royalty",
                "meta_url",
                "exclusive_flag",
                "exchanger",
                "block_number",
            ],
            RoleKind::ExchangerAuth => &["exchanger_owner", "to", "block_number"],
            RoleKind::BuyerAuth | RoleKind::SellerAuth => &["exchanger", "block_number"],
            RoleKind::Delegate => &["address", "pledge_account"],
        }
    }

    /// Key under which the role is embedded in a composite payload.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Buyer => "buyer",
            RoleKind::Seller1 => "seller1",
            RoleKind::Seller2 => "seller2",
            RoleKind::ExchangerAuth => "exchanger_auth",
            RoleKind::BuyerAuth => "buyer_auth",
            RoleKind::SellerAuth => "seller_auth",
            RoleKind::Delegate => "delegate",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role's field tuple, ready to be digested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignableMessage {
    role: RoleKind,
    fields: Vec<String>,
}

impl SignableMessage {
    /// Build from an explicit field tuple, checking it against the role schema.
    pub fn new(role: RoleKind, fields: Vec<String>) -> Result<Self, AuthorizationError> {
        let expected = role.schema().len();
        if fields.len() != expected {
            return Err(AuthorizationError::FieldCount {
                role,
                expected,
                actual: fields.len(),
            });
        }
        Ok(Self { role, fields })
    }

    /// Caller guarantees `fields` follows `role.schema()`.
    pub(crate) fn from_schema_fields(role: RoleKind, fields: Vec<String>) -> Self {
        debug_assert_eq!(fields.len(), role.schema().len());
        Self { role, fields }
    }

    pub fn role(&self) -> RoleKind {
        self.role
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Concatenated field bytes, no delimiter.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let len = self.fields.iter().map(String::len).sum();
        let mut bytes = Vec::with_capacity(len);
        for field in &self.fields {
            bytes.extend_from_slice(field.as_bytes());
        }
        bytes
    }

    /// Text hash of [`canonical_bytes`](Self::canonical_bytes).
    pub fn digest(&self) -> Hash {
        let bytes = self.canonical_bytes();
        tracing::trace!(role = %self.role, len = bytes.len(), "Digesting signable message");
        text_hash(&bytes)
    }
}
