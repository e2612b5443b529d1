//! Outbound port: the node.
//!
//! Implementors provide [`RpcGateway::invoke`]. The typed accessors are
//! provided methods that fix each method name, parameter layout and result
//! decoding once, so every adapter and test double agrees on them.

use crate::domain::envelope::{RpcTransaction, SignedTransaction};
use crate::domain::errors::GatewayError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use shared_types::encoding::{encode_hex_bytes, hex_quantity, parse_hex_u64};
use shared_types::{
    AccountInfo, ActiveMinerList, Address, BeneficiaryAddress, BlockId, BlockNumber, BlockTag,
    Hash, MinerProxy, Quantity, TransactionReceipt, ValidatorList, U256,
};

/// Access to a wormholes node.
#[async_trait]
pub trait RpcGateway: Send + Sync {
    /// Call `method` with positional `params`, returning the raw result.
    async fn invoke(&self, method: &str, params: Vec<Value>) -> Result<Value, GatewayError>;

    /// `eth_chainId`
    async fn chain_id(&self) -> Result<u64, GatewayError> {
        let method = "eth_chainId";
        decode_u64(method, self.invoke(method, vec![]).await?)
    }

    /// `net_version` (decimal string)
    async fn network_id(&self) -> Result<u64, GatewayError> {
        let method = "net_version";
        let version: String = decode(method, self.invoke(method, vec![]).await?)?;
        version
            .parse()
            .map_err(|_| GatewayError::decode(method, format!("invalid net_version {:?}", version)))
    }

    /// `eth_blockNumber`
    async fn block_number(&self) -> Result<BlockNumber, GatewayError> {
        let method = "eth_blockNumber";
        decode_u64(method, self.invoke(method, vec![]).await?)
    }

    /// Next nonce for `account`, counting pool transactions.
    async fn pending_nonce(&self, account: Address) -> Result<u64, GatewayError> {
        let method = "eth_getTransactionCount";
        let result = self
            .invoke(method, vec![json!(account), json!(BlockTag::Pending.as_str())])
            .await?;
        decode_u64(method, result)
    }

    /// `eth_gasPrice`
    async fn gas_price(&self) -> Result<U256, GatewayError> {
        let method = "eth_gasPrice";
        decode_u256(method, self.invoke(method, vec![]).await?)
    }

    /// Balance in the pending state.
    async fn balance(&self, account: Address) -> Result<U256, GatewayError> {
        self.balance_at(account, BlockId::Tag(BlockTag::Pending)).await
    }

    /// Balance at a block.
    async fn balance_at(&self, account: Address, block: BlockId) -> Result<U256, GatewayError> {
        let method = "eth_getBalance";
        let result = self.invoke(method, vec![json!(account), json!(block)]).await?;
        decode_u256(method, result)
    }

    /// Receipt of a mined transaction. Pending or unknown hashes are `NotFound`.
    async fn transaction_receipt(&self, hash: Hash) -> Result<TransactionReceipt, GatewayError> {
        let method = "eth_getTransactionReceipt";
        let result = self.invoke(method, vec![json!(hash)]).await?;
        decode_present(method, format!("receipt {:?}", hash), result)
    }

    /// Transaction at `index` in the block with `block_hash`. Unsigned
    /// transactions are rejected as `Decode`.
    async fn transaction_in_block(
        &self,
        block_hash: Hash,
        index: u64,
    ) -> Result<SignedTransaction, GatewayError> {
        let method = "eth_getTransactionByBlockHashAndIndex";
        let result = self
            .invoke(method, vec![json!(block_hash), json!(hex_quantity(index))])
            .await?;
        let rpc: RpcTransaction = decode_present(
            method,
            format!("transaction {} of block {:?}", index, block_hash),
            result,
        )?;
        SignedTransaction::from_rpc(method, rpc)
    }

    /// Account state including the exchange extension.
    async fn account_info(
        &self,
        account: Address,
        block: BlockNumber,
    ) -> Result<AccountInfo, GatewayError> {
        let method = "eth_getAccountInfo";
        let result = self
            .invoke(method, vec![json!(account), json!(hex_quantity(block))])
            .await?;
        decode_present(method, format!("account {:?}", account), result)
    }

    /// Validator set at a height.
    async fn validators(&self, block: BlockNumber) -> Result<ValidatorList, GatewayError> {
        let method = "eth_getValidator";
        let result = self.invoke(method, vec![json!(hex_quantity(block))]).await?;
        decode_present(method, format!("validators at {}", block), result)
    }

    /// Reward recipients of a block.
    async fn block_beneficiaries(
        &self,
        block: BlockNumber,
    ) -> Result<Vec<BeneficiaryAddress>, GatewayError> {
        let method = "eth_getBlockBeneficiaryAddressByNumber";
        let result = self
            .invoke(method, vec![json!(hex_quantity(block)), json!(true)])
            .await?;
        decode_present(method, format!("beneficiaries of block {}", block), result)
    }

    /// Proxies registered for `account` at a height. `null` means none.
    async fn miner_proxies(
        &self,
        block: BlockNumber,
        account: Address,
    ) -> Result<Vec<MinerProxy>, GatewayError> {
        let method = "eth_queryMinerProxy";
        let result = self
            .invoke(method, vec![json!(hex_quantity(block)), json!(account)])
            .await?;
        decode_or_default(method, result)
    }

    /// Miners in the active pool at a height. `null` means an empty pool.
    async fn active_live_pool(&self, block: BlockNumber) -> Result<ActiveMinerList, GatewayError> {
        let method = "eth_getActiveLivePool";
        let result = self.invoke(method, vec![json!(hex_quantity(block))]).await?;
        decode_or_default(method, result)
    }

    /// Submit a signed transaction; returns the node's transaction hash.
    async fn send_raw_transaction(&self, raw: &[u8]) -> Result<Hash, GatewayError> {
        let method = "eth_sendRawTransaction";
        let result = self.invoke(method, vec![json!(encode_hex_bytes(raw))]).await?;
        decode(method, result)
    }
}

/// Decode a result into `T`.
pub fn decode<T: DeserializeOwned>(method: &str, value: Value) -> Result<T, GatewayError> {
    serde_json::from_value(value).map_err(|e| GatewayError::decode(method, e))
}

/// Decode a result that is `null` when the resource does not exist.
pub fn decode_present<T: DeserializeOwned>(
    method: &str,
    what: String,
    value: Value,
) -> Result<T, GatewayError> {
    if value.is_null() {
        return Err(GatewayError::NotFound(what));
    }
    decode(method, value)
}

fn decode_or_default<T: DeserializeOwned + Default>(
    method: &str,
    value: Value,
) -> Result<T, GatewayError> {
    if value.is_null() {
        return Ok(T::default());
    }
    decode(method, value)
}

fn decode_u64(method: &str, value: Value) -> Result<u64, GatewayError> {
    let text: String = decode(method, value)?;
    parse_hex_u64(&text).map_err(|e| GatewayError::decode(method, e))
}

fn decode_u256(method: &str, value: Value) -> Result<U256, GatewayError> {
    decode::<Quantity>(method, value).map(Quantity::into_inner)
}
