//! # Action Kinds
//!
//! Every transaction the node understands, with its protocol type code and
//! the role authorizations it embeds. The type code is what the node
//! dispatches on; the embedded-role list is what [`WormholesPayload::validate`]
//! checks a payload against.
//!
//! [`WormholesPayload::validate`]: crate::WormholesPayload::validate

use crate::domain::message::RoleKind;
use std::fmt;

/// Closed set of exchange actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Mint,
    Transfer,
    Author,
    AuthorRevoke,
    AccountAuthor,
    AccountAuthorRevoke,
    SnftToErb,
    TokenPledge,
    TokenRevokesPledge,
    Open,
    Close,
    InsertNftBlock,
    TransactionNft,
    BuyerInitiatingTransaction,
    FoundryTradeBuyer,
    FoundryExchange,
    NftExchangeMatch,
    FoundryExchangeInitiated,
    NftDoesNotAuthorizeExchanges,
    AdditionalPledgeAmount,
    RevokesPledgeAmount,
    VoteOfficialNft,
    VoteOfficialNftByApprovedExchanger,
    UnfrozenAccount,
    WeightRedemption,
    BatchSellTransfer,
    ForceBuyingTransfer,
    ExtractErb,
    AccountDelegate,
    /// Plain value transfer, no payload
    NormalTransaction,
}

impl ActionKind {
    pub const ALL: [ActionKind; 30] = [
        ActionKind::Mint,
        ActionKind::Transfer,
        ActionKind::Author,
        ActionKind::AuthorRevoke,
        ActionKind::AccountAuthor,
        ActionKind::AccountAuthorRevoke,
        ActionKind::SnftToErb,
        ActionKind::TokenPledge,
        ActionKind::TokenRevokesPledge,
        ActionKind::Open,
        ActionKind::Close,
        ActionKind::InsertNftBlock,
        ActionKind::TransactionNft,
        ActionKind::BuyerInitiatingTransaction,
        ActionKind::FoundryTradeBuyer,
        ActionKind::FoundryExchange,
        ActionKind::NftExchangeMatch,
        ActionKind::FoundryExchangeInitiated,
        ActionKind::NftDoesNotAuthorizeExchanges,
        ActionKind::AdditionalPledgeAmount,
        ActionKind::RevokesPledgeAmount,
        ActionKind::VoteOfficialNft,
        ActionKind::VoteOfficialNftByApprovedExchanger,
        ActionKind::UnfrozenAccount,
        ActionKind::WeightRedemption,
        ActionKind::BatchSellTransfer,
        ActionKind::ForceBuyingTransfer,
        ActionKind::ExtractErb,
        ActionKind::AccountDelegate,
        ActionKind::NormalTransaction,
    ];

    /// Protocol `type` field. `None` for plain transfers.
    pub const fn type_code(&self) -> Option<u8> {
        let code = match self {
            ActionKind::Mint => 0,
            ActionKind::Transfer => 1,
            ActionKind::Author => 2,
            ActionKind::AuthorRevoke => 3,
            ActionKind::AccountAuthor => 4,
            ActionKind::AccountAuthorRevoke => 5,
            ActionKind::SnftToErb => 6,
            ActionKind::TokenPledge => 9,
            ActionKind::TokenRevokesPledge => 10,
            ActionKind::Open => 11,
            ActionKind::Close => 12,
            ActionKind::InsertNftBlock => 13,
            ActionKind::TransactionNft => 14,
            ActionKind::BuyerInitiatingTransaction => 15,
            ActionKind::FoundryTradeBuyer => 16,
            ActionKind::FoundryExchange => 17,
            ActionKind::NftExchangeMatch => 18,
            ActionKind::FoundryExchangeInitiated => 19,
            ActionKind::NftDoesNotAuthorizeExchanges => 20,
            ActionKind::AdditionalPledgeAmount => 21,
            ActionKind::RevokesPledgeAmount => 22,
            ActionKind::VoteOfficialNft => 23,
            ActionKind::VoteOfficialNftByApprovedExchanger => 24,
            ActionKind::UnfrozenAccount => 25,
            ActionKind::WeightRedemption => 26,
            ActionKind::BatchSellTransfer => 27,
            ActionKind::ForceBuyingTransfer => 28,
            ActionKind::ExtractErb => 29,
            ActionKind::AccountDelegate => 31,
            ActionKind::NormalTransaction => return None,
        };
        Some(code)
    }

    /// Inverse of [`type_code`](Self::type_code).
    pub fn from_type_code(code: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_code() == Some(code))
    }

    /// Role authorizations a payload of this kind carries, in payload order.
    pub const fn embedded_roles(&self) -> &'static [RoleKind] {
        match self {
            ActionKind::TransactionNft => &[RoleKind::Buyer],
            ActionKind::BuyerInitiatingTransaction => &[RoleKind::Seller1],
            ActionKind::FoundryTradeBuyer => &[RoleKind::Seller2],
            ActionKind::FoundryExchange => &[RoleKind::Buyer, RoleKind::Seller2],
            ActionKind::NftExchangeMatch => {
                &[RoleKind::Buyer, RoleKind::Seller1, RoleKind::ExchangerAuth]
            }
            ActionKind::FoundryExchangeInitiated => {
                &[RoleKind::Buyer, RoleKind::Seller2, RoleKind::ExchangerAuth]
            }
            ActionKind::NftDoesNotAuthorizeExchanges => &[RoleKind::Buyer, RoleKind::Seller1],
            ActionKind::VoteOfficialNftByApprovedExchanger => &[RoleKind::ExchangerAuth],
            ActionKind::BatchSellTransfer => &[
                RoleKind::Buyer,
                RoleKind::Seller1,
                RoleKind::BuyerAuth,
                RoleKind::SellerAuth,
                RoleKind::ExchangerAuth,
            ],
            ActionKind::ForceBuyingTransfer => {
                &[RoleKind::Buyer, RoleKind::BuyerAuth, RoleKind::ExchangerAuth]
            }
            _ => &[],
        }
    }

    /// Whether the transaction carries a `wormholes:` payload.
    pub const fn carries_payload(&self) -> bool {
        !matches!(self, ActionKind::NormalTransaction)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ActionKind::Mint => "Mint",
            ActionKind::Transfer => "Transfer",
            ActionKind::Author => "Author",
            ActionKind::AuthorRevoke => "AuthorRevoke",
            ActionKind::AccountAuthor => "AccountAuthor",
            ActionKind::AccountAuthorRevoke => "AccountAuthorRevoke",
            ActionKind::SnftToErb => "SNFTToERB",
            ActionKind::TokenPledge => "TokenPledge",
            ActionKind::TokenRevokesPledge => "TokenRevokesPledge",
            ActionKind::Open => "Open",
            ActionKind::Close => "Close",
            ActionKind::InsertNftBlock => "InsertNFTBlock",
            ActionKind::TransactionNft => "TransactionNFT",
            ActionKind::BuyerInitiatingTransaction => "BuyerInitiatingTransaction",
            ActionKind::FoundryTradeBuyer => "FoundryTradeBuyer",
            ActionKind::FoundryExchange => "FoundryExchange",
            ActionKind::NftExchangeMatch => "NftExchangeMatch",
            ActionKind::FoundryExchangeInitiated => "FoundryExchangeInitiated",
            ActionKind::NftDoesNotAuthorizeExchanges => "NFTDoesNotAuthorizeExchanges",
            ActionKind::AdditionalPledgeAmount => "AdditionalPledgeAmount",
            ActionKind::RevokesPledgeAmount => "RevokesPledgeAmount",
            ActionKind::VoteOfficialNft => "VoteOfficialNFT",
            ActionKind::VoteOfficialNftByApprovedExchanger => "VoteOfficialNFTByApprovedExchanger",
            ActionKind::UnfrozenAccount => "UnfrozenAccount",
            ActionKind::WeightRedemption => "WeightRedemption",
            ActionKind::BatchSellTransfer => "BatchSellTransfer",
            ActionKind::ForceBuyingTransfer => "ForceBuyingTransfer",
            ActionKind::ExtractErb => "ExtractERB",
            ActionKind::AccountDelegate => "AccountDelegate",
            ActionKind::NormalTransaction => "NormalTransaction",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
