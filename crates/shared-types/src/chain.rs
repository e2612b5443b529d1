//! # Node Data Types
//!
//! Shapes returned by the node's query methods.
//!
//! Receipts follow the Ethereum JSON-RPC camelCase layout. Account,
//! validator and miner listings are the node's own extension types, which
//! it serializes with exported Go field names (PascalCase) and big integers
//! as bare numbers, so every integer here goes through [`Quantity`].

use crate::entities::{Address, Hash, Quantity};
use serde::{Deserialize, Serialize};

// =============================================================================
// RECEIPTS
// =============================================================================

/// Receipt of a mined transaction (`eth_getTransactionReceipt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: Hash,
    #[serde(default)]
    pub transaction_index: Option<Quantity>,
    #[serde(default)]
    pub block_hash: Option<Hash>,
    #[serde(default)]
    pub block_number: Option<Quantity>,
    #[serde(default)]
    pub from: Option<Address>,
    #[serde(default)]
    pub to: Option<Address>,
    #[serde(default)]
    pub cumulative_gas_used: Option<Quantity>,
    #[serde(default)]
    pub gas_used: Option<Quantity>,
    #[serde(default)]
    pub contract_address: Option<Address>,
    /// `0x1` success, `0x0` failure.
    #[serde(default)]
    pub status: Option<Quantity>,
    #[serde(default)]
    pub logs: Vec<serde_json::Value>,
}

impl TransactionReceipt {
    /// Whether the node reported successful execution.
    pub fn succeeded(&self) -> bool {
        self.status.map(|s| s == Quantity::from(1u64)).unwrap_or(false)
    }
}

// =============================================================================
// ACCOUNT STATE (eth_getAccountInfo)
// =============================================================================

/// Account state including the exchange/pledge extension and NFT slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccountInfo {
    pub nonce: u64,
    pub balance: Option<Quantity>,
    pub root: Option<Hash>,
    pub worm: Option<WormholesExtension>,
    pub nft: AccountNft,
}

/// Exchange, pledge and voting state attached to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WormholesExtension {
    pub pledged_balance: Option<Quantity>,
    pub pledged_block_number: Option<Quantity>,
    pub exchanger_flag: bool,
    pub block_number: Option<Quantity>,
    pub exchanger_balance: Option<Quantity>,
    #[serde(rename = "SNFTAgentRecipient")]
    pub snft_agent_recipient: Option<Address>,
    pub vote_block_number: Option<Quantity>,
    pub vote_weight: Option<Quantity>,
    pub coefficient: u8,
    pub fee_rate: u16,
    pub exchanger_name: String,
    #[serde(rename = "ExchangerURL")]
    pub exchanger_url: String,
    pub approve_address_list: Vec<Address>,
    #[serde(rename = "SNFTNoMerge")]
    pub snft_no_merge: bool,
    #[serde(rename = "LockSNFTFlag")]
    pub lock_snft_flag: bool,
    #[serde(rename = "NFTBalance")]
    pub nft_balance: u64,
}

/// NFT slot of an account whose address is itself an NFT.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccountNft {
    pub name: String,
    pub symbol: String,
    pub price: Option<Quantity>,
    /// 0: not traded, 1: buyer, 2: seller.
    pub direction: u8,
    pub owner: Option<Address>,
    #[serde(rename = "NFTApproveAddressList")]
    pub nft_approve_address_list: Option<Address>,
    pub merge_level: u8,
    pub creator: Option<Address>,
    pub royalty: u32,
    pub exchanger: Option<Address>,
    #[serde(rename = "MetaURL")]
    pub meta_url: String,
}

// =============================================================================
// VALIDATORS AND MINERS
// =============================================================================

/// Validator set at a height (`eth_getValidator`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ValidatorList {
    pub validators: Vec<Validator>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Validator {
    pub addr: Option<Address>,
    pub balance: Option<Quantity>,
    pub proxy: Option<Address>,
    pub weight: Vec<Quantity>,
}

/// Block reward recipient and the SNFT it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BeneficiaryAddress {
    pub address: Address,
    pub nft_address: Address,
}

/// Miner currently in the active pool (`eth_getActiveLivePool`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActiveMiner {
    pub address: Address,
    pub balance: Option<Quantity>,
    pub height: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ActiveMinerList {
    pub active_miners: Vec<ActiveMiner>,
}

/// Miner and its registered proxy (`eth_queryMinerProxy`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MinerProxy {
    pub address: Address,
    pub proxy: Address,
}
