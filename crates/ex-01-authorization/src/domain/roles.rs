//! # Role Messages
//!
//! One struct per signing role. Struct fields are named after the schema
//! entries in [`RoleKind::schema`], so the serde form of a role message is
//! exactly its transported key set (minus `sig`).
//!
//! Every field is caller-encoded text. Amounts and heights are expected as
//! `0x` hex quantities and addresses as `0x` hex, but none of that is
//! checked here: the signer signs what it is given.

use crate::domain::message::{RoleKind, SignableMessage};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A message with a fixed role schema.
pub trait RoleMessage: Serialize + DeserializeOwned + Clone {
    const KIND: RoleKind;

    /// Field values in schema order.
    fn ordered_fields(&self) -> Vec<&str>;

    /// The canonical form this message is signed as.
    fn signable(&self) -> SignableMessage {
        let fields = self.ordered_fields().into_iter().map(str::to_owned).collect();
        SignableMessage::from_schema_fields(Self::KIND, fields)
    }
}

/// Buyer's offer for an NFT.
///
/// An empty `nft_address` marks a lazy (unminted) purchase; an empty
/// `seller` means the seller is not fixed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerMessage {
    pub amount: String,
    pub nft_address: String,
    pub exchanger: String,
    pub block_number: String,
    pub seller: String,
}

impl BuyerMessage {
    pub fn new(
        amount: impl Into<String>,
        nft_address: impl Into<String>,
        exchanger: impl Into<String>,
        block_number: impl Into<String>,
        seller: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            nft_address: nft_address.into(),
            exchanger: exchanger.into(),
            block_number: block_number.into(),
            seller: seller.into(),
        }
    }
}

impl RoleMessage for BuyerMessage {
    const KIND: RoleKind = RoleKind::Buyer;

    fn ordered_fields(&self) -> Vec<&str> {
        vec![
            self.amount.as_str(),
            self.nft_address.as_str(),
            self.exchanger.as_str(),
            self.block_number.as_str(),
            self.seller.as_str(),
        ]
    }
}

/// Seller's listing of a minted NFT.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller1Message {
    pub amount: String,
    pub nft_address: String,
    pub exchanger: String,
    pub block_number: String,
}

impl Seller1Message {
    pub fn new(
        amount: impl Into<String>,
        nft_address: impl Into<String>,
        exchanger: impl Into<String>,
        block_number: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            nft_address: nft_address.into(),
            exchanger: exchanger.into(),
            block_number: block_number.into(),
        }
    }
}

impl RoleMessage for Seller1Message {
    const KIND: RoleKind = RoleKind::Seller1;

    fn ordered_fields(&self) -> Vec<&str> {
        vec![
            self.amount.as_str(),
            self.nft_address.as_str(),
            self.exchanger.as_str(),
            self.block_number.as_str(),
        ]
    }
}

/// Creator's listing of an NFT that is minted on purchase.
///
/// `exclusive_flag` is `"0"` (inclusive) or `"1"` (exclusive to `exchanger`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller2Message {
    pub amount: String,
    pub royalty: String,
    pub meta_url: String,
    pub exclusive_flag: String,
    pub exchanger: String,
    pub block_number: String,
}

impl Seller2Message {
    pub fn new(
        amount: impl Into<String>,
        royalty: impl Into<String>,
        meta_url: impl Into<String>,
        exclusive_flag: impl Into<String>,
        exchanger: impl Into<String>,
        block_number: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            royalty: royalty.into(),
            meta_url: meta_url.into(),
            exclusive_flag: exclusive_flag.into(),
            exchanger: exchanger.into(),
            block_number: block_number.into(),
        }
    }
}

impl RoleMessage for Seller2Message {
    const KIND: RoleKind = RoleKind::Seller2;

    fn ordered_fields(&self) -> Vec<&str> {
        vec![
            self.amount.as_str(),
            self.royalty.as_str(),
            self.meta_url.as_str(),
            self.exclusive_flag.as_str(),
            self.exchanger.as_str(),
            self.block_number.as_str(),
        ]
    }
}

/// Exchange owner authorizing another account to act as its exchanger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangerAuthMessage {
    pub exchanger_owner: String,
    pub to: String,
    pub block_number: String,
}

impl ExchangerAuthMessage {
    pub fn new(
        exchanger_owner: impl Into<String>,
        to: impl Into<String>,
        block_number: impl Into<String>,
    ) -> Self {
        Self {
            exchanger_owner: exchanger_owner.into(),
            to: to.into(),
            block_number: block_number.into(),
        }
    }
}

impl RoleMessage for ExchangerAuthMessage {
    const KIND: RoleKind = RoleKind::ExchangerAuth;

    fn ordered_fields(&self) -> Vec<&str> {
        vec![self.exchanger_owner.as_str(), self.to.as_str(), self.block_number.as_str()]
    }
}

/// Buyer authorizing an exchanger to settle on its behalf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerAuthMessage {
    pub exchanger: String,
    pub block_number: String,
}

impl BuyerAuthMessage {
    pub fn new(exchanger: impl Into<String>, block_number: impl Into<String>) -> Self {
        Self {
            exchanger: exchanger.into(),
            block_number: block_number.into(),
        }
    }
}

impl RoleMessage for BuyerAuthMessage {
    const KIND: RoleKind = RoleKind::BuyerAuth;

    fn ordered_fields(&self) -> Vec<&str> {
        vec![self.exchanger.as_str(), self.block_number.as_str()]
    }
}

/// Seller authorizing an exchanger to settle on its behalf.
///
/// Same field tuple as [`BuyerAuthMessage`]; the payload slot it is
/// embedded in is what tells the node which side signed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerAuthMessage {
    pub exchanger: String,
    pub block_number: String,
}

impl SellerAuthMessage {
    pub fn new(exchanger: impl Into<String>, block_number: impl Into<String>) -> Self {
        Self {
            exchanger: exchanger.into(),
            block_number: block_number.into(),
        }
    }
}

impl RoleMessage for SellerAuthMessage {
    const KIND: RoleKind = RoleKind::SellerAuth;

    fn ordered_fields(&self) -> Vec<&str> {
        vec![self.exchanger.as_str(), self.block_number.as_str()]
    }
}

/// Staker delegating its pledge to a proxy account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateMessage {
    pub address: String,
    pub pledge_account: String,
}

impl DelegateMessage {
    pub fn new(address: impl Into<String>, pledge_account: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            pledge_account: pledge_account.into(),
        }
    }
}

impl RoleMessage for DelegateMessage {
    const KIND: RoleKind = RoleKind::Delegate;

    fn ordered_fields(&self) -> Vec<&str> {
        vec![self.address.as_str(), self.pledge_account.as_str()]
    }
}
