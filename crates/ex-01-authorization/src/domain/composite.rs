//! # Composite Transaction Request
//!
//! The node reads exchange actions from the `data` field of an ordinary
//! transaction: the ASCII prefix `wormholes:` followed by a JSON object
//! with the action `type`, a `version` and whichever direct parameters and
//! role authorizations that action takes.
//!
//! ```json
//! wormholes:{"type":18,"version":"v0.0.1","buyer":{..,"sig":".."},"seller1":{..},"exchanger_auth":{..}}
//! ```
//!
//! Embedded authorizations are carried exactly as received. Composition
//! checks which roles are present, never what they say.

use crate::domain::action::ActionKind;
use crate::domain::authorization::RoleAuthorization;
use crate::domain::errors::AuthorizationError;
use crate::domain::message::RoleKind;
use crate::domain::roles::{
    BuyerAuthMessage, BuyerMessage, ExchangerAuthMessage, Seller1Message, Seller2Message,
    SellerAuthMessage,
};
use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

/// Prefix that marks transaction data as an exchange payload.
pub const PAYLOAD_PREFIX: &[u8] = b"wormholes:";

/// Payload format version the node currently accepts.
pub const PAYLOAD_VERSION: &str = "v0.0.1";

/// Action payload. Absent parameters are omitted from the JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WormholesPayload {
    #[serde(rename = "type")]
    pub type_code: u8,
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nft_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchanger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub royalty: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_address: Option<String>,
    /// Hex delegate signature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_sign: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<RoleAuthorization<BuyerMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller1: Option<RoleAuthorization<Seller1Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller2: Option<RoleAuthorization<Seller2Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchanger_auth: Option<RoleAuthorization<ExchangerAuthMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer_auth: Option<RoleAuthorization<BuyerAuthMessage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_auth: Option<RoleAuthorization<SellerAuthMessage>>,
}

impl WormholesPayload {
    /// Empty payload for `kind`. Plain transfers have no payload.
    pub fn new(kind: ActionKind, version: impl Into<String>) -> Result<Self, AuthorizationError> {
        let type_code = kind.type_code().ok_or(AuthorizationError::NoPayload {
            action: kind.name(),
        })?;
        Ok(Self {
            type_code,
            version: version.into(),
            nft_address: None,
            exchanger: None,
            royalty: None,
            meta_url: None,
            fee_rate: None,
            name: None,
            url: None,
            dir: None,
            start_index: None,
            number: None,
            creator: None,
            proxy_address: None,
            proxy_sign: None,
            buyer: None,
            seller1: None,
            seller2: None,
            exchanger_auth: None,
            buyer_auth: None,
            seller_auth: None,
        })
    }

    pub fn action_kind(&self) -> Result<ActionKind, AuthorizationError> {
        ActionKind::from_type_code(self.type_code)
            .ok_or(AuthorizationError::UnknownActionType(self.type_code))
    }

    /// Roles embedded in this payload, in payload order.
    pub fn present_roles(&self) -> Vec<RoleKind> {
        let slots = [
            (RoleKind::Buyer, self.buyer.is_some()),
            (RoleKind::Seller1, self.seller1.is_some()),
            (RoleKind::Seller2, self.seller2.is_some()),
            (RoleKind::BuyerAuth, self.buyer_auth.is_some()),
            (RoleKind::SellerAuth, self.seller_auth.is_some()),
            (RoleKind::ExchangerAuth, self.exchanger_auth.is_some()),
        ];
        slots
            .into_iter()
            .filter_map(|(role, present)| present.then_some(role))
            .collect()
    }

    /// Check the embedded roles are exactly the ones the action takes.
    pub fn validate(&self) -> Result<(), AuthorizationError> {
        let kind = self.action_kind()?;
        let required = kind.embedded_roles();
        let present = self.present_roles();

        if let Some(role) = required.iter().find(|r| !present.contains(*r)) {
            return Err(AuthorizationError::MissingRole {
                action: kind.name(),
                role: *role,
            });
        }
        if let Some(role) = present.iter().find(|r| !required.contains(*r)) {
            return Err(AuthorizationError::UnexpectedRole {
                action: kind.name(),
                role: *role,
            });
        }
        Ok(())
    }

    /// `wormholes:` ‖ JSON, ready for the transaction `data` field.
    pub fn to_tx_data(&self) -> Result<Vec<u8>, AuthorizationError> {
        self.validate()?;
        let json = serde_json::to_vec(self)?;
        let mut data = Vec::with_capacity(PAYLOAD_PREFIX.len() + json.len());
        data.extend_from_slice(PAYLOAD_PREFIX);
        data.extend_from_slice(&json);
        Ok(data)
    }

    /// Parse transaction data produced by [`to_tx_data`](Self::to_tx_data).
    pub fn from_tx_data(data: &[u8]) -> Result<Self, AuthorizationError> {
        let json = data
            .strip_prefix(PAYLOAD_PREFIX)
            .ok_or(AuthorizationError::MissingPrefix)?;
        Ok(serde_json::from_slice(json)?)
    }
}

/// Everything needed to build the outer transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionIntent {
    pub action: ActionKind,
    pub to: Address,
    pub value: U256,
    pub data: Vec<u8>,
}

impl TransactionIntent {
    /// Transaction carrying an exchange payload.
    pub fn for_payload(
        payload: &WormholesPayload,
        to: Address,
        value: U256,
    ) -> Result<Self, AuthorizationError> {
        Ok(Self {
            action: payload.action_kind()?,
            to,
            value,
            data: payload.to_tx_data()?,
        })
    }

    /// Plain value transfer with caller-supplied data.
    pub fn plain(to: Address, value: U256, data: Vec<u8>) -> Self {
        Self {
            action: ActionKind::NormalTransaction,
            to,
            value,
            data,
        }
    }
}
