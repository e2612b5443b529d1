//! Read-only chain lookups, with gateway errors classified for callers.

use crate::errors::ExchangeError;
use crate::service::ExchangeClient;
use ex_02_rpc_gateway::{RpcGateway, SignedTransaction};
use shared_types::{
    AccountInfo, ActiveMinerList, Address, BeneficiaryAddress, BlockId, BlockNumber, Hash,
    MinerProxy, TransactionReceipt, ValidatorList, U256,
};
use tracing::instrument;

impl<G: RpcGateway> ExchangeClient<G> {
    pub async fn block_number(&self) -> Result<BlockNumber, ExchangeError> {
        Ok(self.gateway.block_number().await?)
    }

    pub async fn network_id(&self) -> Result<u64, ExchangeError> {
        Ok(self.gateway.network_id().await?)
    }

    /// Pending-state balance of `account`.
    #[instrument(skip(self))]
    pub async fn balance(&self, account: Address) -> Result<U256, ExchangeError> {
        Ok(self.gateway.balance(account).await?)
    }

    #[instrument(skip(self))]
    pub async fn balance_at(&self, account: Address, block: BlockId) -> Result<U256, ExchangeError> {
        Ok(self.gateway.balance_at(account, block).await?)
    }

    /// Receipt of `hash`; [`ExchangeError::NotFound`] until it is mined.
    #[instrument(skip(self))]
    pub async fn transaction_receipt(&self, hash: Hash) -> Result<TransactionReceipt, ExchangeError> {
        Ok(self.gateway.transaction_receipt(hash).await?)
    }

    /// Transaction at `index` of the block with `block_hash`.
    #[instrument(skip(self))]
    pub async fn transaction_in_block(
        &self,
        block_hash: Hash,
        index: u64,
    ) -> Result<SignedTransaction, ExchangeError> {
        Ok(self.gateway.transaction_in_block(block_hash, index).await?)
    }

    #[instrument(skip(self))]
    pub async fn account_info(
        &self,
        account: Address,
        block: BlockNumber,
    ) -> Result<AccountInfo, ExchangeError> {
        Ok(self.gateway.account_info(account, block).await?)
    }

    #[instrument(skip(self))]
    pub async fn validators(&self, block: BlockNumber) -> Result<ValidatorList, ExchangeError> {
        Ok(self.gateway.validators(block).await?)
    }

    #[instrument(skip(self))]
    pub async fn block_beneficiaries(
        &self,
        block: BlockNumber,
    ) -> Result<Vec<BeneficiaryAddress>, ExchangeError> {
        Ok(self.gateway.block_beneficiaries(block).await?)
    }

    #[instrument(skip(self))]
    pub async fn miner_proxies(
        &self,
        block: BlockNumber,
        account: Address,
    ) -> Result<Vec<MinerProxy>, ExchangeError> {
        Ok(self.gateway.miner_proxies(block, account).await?)
    }

    #[instrument(skip(self))]
    pub async fn active_live_pool(&self, block: BlockNumber) -> Result<ActiveMinerList, ExchangeError> {
        Ok(self.gateway.active_live_pool(block).await?)
    }
}
