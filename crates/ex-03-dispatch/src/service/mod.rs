//! # Exchange Client Service
//!
//! Operations are grouped by concern:
//!
//! - `nft`: mint, transfer, authorization and official NFT batches
//! - `trade`: the multi-party trade settlements (types 14-20, 27, 28)
//! - `staking`: pledges, exchanges, delegation and account maintenance
//! - `signing`: role signatures with chain-derived deadlines
//! - `queries`: read-only chain lookups
//!
//! All of them end in [`ExchangeClient::submit`], the single place a
//! transaction is built, signed and sent.

pub mod nft;
pub mod queries;
pub mod signing;
pub mod staking;
pub mod trade;

#[cfg(test)]
pub(crate) mod mock;

use crate::config::ClientConfig;
use crate::errors::ExchangeError;
use ex_01_authorization::{ActionKind, TransactionIntent, Wallet, WormholesPayload};
use ex_02_rpc_gateway::{JsonRpcGateway, LegacyTransaction, RpcGateway};
use shared_types::{Address, Hash, U256};
use tracing::{debug, info};

/// Exchange client bound to one account and one node.
pub struct ExchangeClient<G: RpcGateway> {
    wallet: Wallet,
    gateway: G,
    config: ClientConfig,
}

impl ExchangeClient<JsonRpcGateway> {
    /// Connect to the configured node over HTTP.
    pub fn connect(private_key: &str, config: ClientConfig) -> Result<Self, ExchangeError> {
        config.validate()?;
        let wallet = Wallet::from_private_key(private_key)?;
        let gateway = JsonRpcGateway::new(&config.endpoint, config.request_timeout())?;
        Ok(Self::new(wallet, gateway, config))
    }
}

impl<G: RpcGateway> ExchangeClient<G> {
    /// Create a client over any gateway.
    pub fn new(wallet: Wallet, gateway: G, config: ClientConfig) -> Self {
        Self {
            wallet,
            gateway,
            config,
        }
    }

    /// The caller's account.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Empty payload of `kind` at the configured version.
    pub(crate) fn payload(&self, kind: ActionKind) -> Result<WormholesPayload, ExchangeError> {
        Ok(WormholesPayload::new(kind, self.config.payload_version.as_str())?)
    }

    /// Wrap `payload` in a transaction to `to` carrying `value` and submit it.
    pub(crate) async fn submit_payload(
        &self,
        payload: WormholesPayload,
        to: Address,
        value: U256,
    ) -> Result<Hash, ExchangeError> {
        let intent = TransactionIntent::for_payload(&payload, to, value)?;
        self.submit(intent).await
    }

    /// Chain id from config, else from the node.
    pub async fn resolve_chain_id(&self) -> Result<u64, ExchangeError> {
        match self.config.chain_id {
            Some(chain_id) => Ok(chain_id),
            None => Ok(self.gateway.chain_id().await?),
        }
    }

    /// Build, sign and send the outer transaction for `intent`.
    pub async fn submit(&self, intent: TransactionIntent) -> Result<Hash, ExchangeError> {
        let from = self.address();
        let chain_id = self.resolve_chain_id().await?;
        let nonce = self.gateway.pending_nonce(from).await?;
        let gas_price = self.gateway.gas_price().await?;

        let tx = LegacyTransaction {
            nonce,
            gas_price,
            gas_limit: self.config.gas_limit,
            to: intent.to,
            value: intent.value,
            data: intent.data,
        };
        debug!(
            action = %intent.action,
            chain_id,
            nonce,
            data_len = tx.data.len(),
            "Signing transaction"
        );

        let signed = tx.sign(self.wallet.keypair(), chain_id)?;
        let hash = self.gateway.send_raw_transaction(&signed.raw()).await?;

        info!(action = %intent.action, ?hash, ?from, nonce, "Transaction submitted");
        Ok(hash)
    }

    /// Plain value transfer, optionally with raw data (type-less).
    #[tracing::instrument(skip(self, data))]
    pub async fn normal_transaction(
        &self,
        to: Address,
        value: U256,
        data: &[u8],
    ) -> Result<Hash, ExchangeError> {
        self.submit(TransactionIntent::plain(to, value, data.to_vec()))
            .await
    }
}
