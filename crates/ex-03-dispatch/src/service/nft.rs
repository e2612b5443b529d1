//! NFT lifecycle: minting, transfers, approvals and official NFT batches.

use crate::errors::ExchangeError;
use crate::service::ExchangeClient;
use ex_01_authorization::{ActionKind, ExchangerAuthMessage, RoleAuthorization, WormholesPayload};
use ex_02_rpc_gateway::RpcGateway;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash, U256};
use tracing::instrument;

/// A batch of official NFTs, as inserted by the chain operator or voted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialNftBatch {
    /// Metadata directory (IPFS path)
    pub dir: String,
    /// First index of the batch, hex
    pub start_index: String,
    pub number: u64,
    pub royalty: u32,
    pub creator: String,
}

impl OfficialNftBatch {
    fn fill(&self, payload: WormholesPayload) -> WormholesPayload {
        WormholesPayload {
            dir: Some(self.dir.clone()),
            start_index: Some(self.start_index.clone()),
            number: Some(self.number),
            royalty: Some(self.royalty),
            creator: Some(self.creator.clone()),
            ..payload
        }
    }
}

impl<G: RpcGateway> ExchangeClient<G> {
    /// Mint an NFT owned by the caller (type 0). An empty `exchanger` leaves
    /// it unbound to any exchange.
    #[instrument(skip(self))]
    pub async fn mint(
        &self,
        royalty: u32,
        meta_url: &str,
        exchanger: &str,
    ) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            royalty: Some(royalty),
            meta_url: Some(meta_url.to_string()),
            exchanger: Some(exchanger.to_string()),
            ..self.payload(ActionKind::Mint)?
        };
        self.submit_payload(payload, self.address(), U256::zero())
            .await
    }

    /// Transfer an NFT to `to` (type 1).
    #[instrument(skip(self))]
    pub async fn transfer(&self, nft_address: &str, to: Address) -> Result<Hash, ExchangeError> {
        self.nft_to(ActionKind::Transfer, nft_address, to).await
    }

    /// Approve `to` to handle one NFT (type 2).
    #[instrument(skip(self))]
    pub async fn author(&self, nft_address: &str, to: Address) -> Result<Hash, ExchangeError> {
        self.nft_to(ActionKind::Author, nft_address, to).await
    }

    /// Withdraw a single-NFT approval (type 3).
    #[instrument(skip(self))]
    pub async fn author_revoke(
        &self,
        nft_address: &str,
        to: Address,
    ) -> Result<Hash, ExchangeError> {
        self.nft_to(ActionKind::AuthorRevoke, nft_address, to).await
    }

    /// Approve `to` to handle every NFT of the caller (type 4).
    #[instrument(skip(self))]
    pub async fn account_author(&self, to: Address) -> Result<Hash, ExchangeError> {
        let payload = self.payload(ActionKind::AccountAuthor)?;
        self.submit_payload(payload, to, U256::zero()).await
    }

    /// Withdraw an account-wide approval (type 5).
    #[instrument(skip(self))]
    pub async fn account_author_revoke(&self, to: Address) -> Result<Hash, ExchangeError> {
        let payload = self.payload(ActionKind::AccountAuthorRevoke)?;
        self.submit_payload(payload, to, U256::zero()).await
    }

    /// Redeem an SNFT fragment for ERB (type 6).
    #[instrument(skip(self))]
    pub async fn snft_to_erb(&self, nft_address: &str) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            nft_address: Some(nft_address.to_string()),
            ..self.payload(ActionKind::SnftToErb)?
        };
        self.submit_payload(payload, self.address(), U256::zero())
            .await
    }

    /// Insert a batch of official NFTs (type 13).
    #[instrument(skip(self))]
    pub async fn insert_nft_block(&self, batch: &OfficialNftBatch) -> Result<Hash, ExchangeError> {
        let payload = batch.fill(self.payload(ActionKind::InsertNftBlock)?);
        self.submit_payload(payload, self.address(), U256::zero())
            .await
    }

    /// Vote a batch of official NFTs in (type 23).
    #[instrument(skip(self))]
    pub async fn vote_official_nft(&self, batch: &OfficialNftBatch) -> Result<Hash, ExchangeError> {
        let payload = batch.fill(self.payload(ActionKind::VoteOfficialNft)?);
        self.submit_payload(payload, self.address(), U256::zero())
            .await
    }

    /// Vote a batch in as an exchanger approved by `exchanger_auth`'s signer (type 24).
    #[instrument(skip(self, exchanger_auth))]
    pub async fn vote_official_nft_by_approved_exchanger(
        &self,
        batch: &OfficialNftBatch,
        exchanger_auth: RoleAuthorization<ExchangerAuthMessage>,
    ) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            exchanger_auth: Some(exchanger_auth),
            ..batch.fill(self.payload(ActionKind::VoteOfficialNftByApprovedExchanger)?)
        };
        self.submit_payload(payload, self.address(), U256::zero())
            .await
    }

    async fn nft_to(
        &self,
        kind: ActionKind,
        nft_address: &str,
        to: Address,
    ) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            nft_address: Some(nft_address.to_string()),
            ..self.payload(kind)?
        };
        self.submit_payload(payload, to, U256::zero()).await
    }
}
