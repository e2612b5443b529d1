//! Trade settlement.
//!
//! Every operation here consumes authorizations signed by other parties
//! and embeds them unchanged. Which party submits, and therefore pays gas
//! and becomes the transaction sender, differs per action:
//!
//! | Type | Operation | Submitted by | Embeds |
//! |------|-----------|--------------|--------|
//! | 14 | `transaction_nft` | seller | buyer |
//! | 15 | `buyer_initiating_transaction` | buyer | seller1 |
//! | 16 | `foundry_trade_buyer` | buyer | seller2 |
//! | 17 | `foundry_exchange` | exchanger | buyer, seller2 |
//! | 18 | `nft_exchange_match` | authorized exchanger | buyer, seller1, exchanger_auth |
//! | 19 | `foundry_exchange_initiated` | authorized exchanger | buyer, seller2, exchanger_auth |
//! | 20 | `nft_does_not_authorize_exchanges` | exchanger | buyer, seller1 |
//! | 27 | `batch_sell_transfer` | exchanger | buyer, seller1, buyer_auth, seller_auth, exchanger_auth |
//! | 28 | `force_buying_transfer` | exchanger | buyer, buyer_auth, exchanger_auth |

use crate::errors::ExchangeError;
use crate::service::ExchangeClient;
use ex_01_authorization::{
    ActionKind, BuyerAuthMessage, BuyerMessage, ExchangerAuthMessage, RoleAuthorization,
    Seller1Message, Seller2Message, SellerAuthMessage, WormholesPayload,
};
use ex_02_rpc_gateway::RpcGateway;
use shared_types::encoding::parse_hex_quantity;
use shared_types::{Address, Hash, U256};
use tracing::instrument;

impl<G: RpcGateway> ExchangeClient<G> {
    /// Seller accepts a buyer's signed offer (type 14).
    #[instrument(skip(self, buyer))]
    pub async fn transaction_nft(
        &self,
        buyer: RoleAuthorization<BuyerMessage>,
        to: Address,
    ) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            buyer: Some(buyer),
            ..self.payload(ActionKind::TransactionNft)?
        };
        self.submit_payload(payload, to, U256::zero()).await
    }

    /// Buyer takes a minted NFT listing, paying the listed amount (type 15).
    #[instrument(skip(self, seller1))]
    pub async fn buyer_initiating_transaction(
        &self,
        seller1: RoleAuthorization<Seller1Message>,
    ) -> Result<Hash, ExchangeError> {
        let value = parse_hex_quantity(&seller1.message.amount)?;
        let payload = WormholesPayload {
            seller1: Some(seller1),
            ..self.payload(ActionKind::BuyerInitiatingTransaction)?
        };
        self.submit_payload(payload, self.address(), value).await
    }

    /// Buyer takes a lazy-mint listing, paying the listed amount (type 16).
    #[instrument(skip(self, seller2))]
    pub async fn foundry_trade_buyer(
        &self,
        seller2: RoleAuthorization<Seller2Message>,
    ) -> Result<Hash, ExchangeError> {
        let value = parse_hex_quantity(&seller2.message.amount)?;
        let payload = WormholesPayload {
            seller2: Some(seller2),
            ..self.payload(ActionKind::FoundryTradeBuyer)?
        };
        self.submit_payload(payload, self.address(), value).await
    }

    /// Exchanger settles a lazy-mint trade it hosts (type 17).
    #[instrument(skip(self, buyer, seller2))]
    pub async fn foundry_exchange(
        &self,
        buyer: RoleAuthorization<BuyerMessage>,
        seller2: RoleAuthorization<Seller2Message>,
        to: Address,
    ) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            buyer: Some(buyer),
            seller2: Some(seller2),
            ..self.payload(ActionKind::FoundryExchange)?
        };
        self.submit_payload(payload, to, U256::zero()).await
    }

    /// Authorized exchanger matches a buyer with a minted listing (type 18).
    #[instrument(skip(self, buyer, seller1, exchanger_auth))]
    pub async fn nft_exchange_match(
        &self,
        buyer: RoleAuthorization<BuyerMessage>,
        seller1: RoleAuthorization<Seller1Message>,
        exchanger_auth: RoleAuthorization<ExchangerAuthMessage>,
        to: Address,
    ) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            buyer: Some(buyer),
            seller1: Some(seller1),
            exchanger_auth: Some(exchanger_auth),
            ..self.payload(ActionKind::NftExchangeMatch)?
        };
        self.submit_payload(payload, to, U256::zero()).await
    }

    /// Authorized exchanger settles a lazy-mint trade (type 19).
    #[instrument(skip(self, buyer, seller2, exchanger_auth))]
    pub async fn foundry_exchange_initiated(
        &self,
        buyer: RoleAuthorization<BuyerMessage>,
        seller2: RoleAuthorization<Seller2Message>,
        exchanger_auth: RoleAuthorization<ExchangerAuthMessage>,
        to: Address,
    ) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            buyer: Some(buyer),
            seller2: Some(seller2),
            exchanger_auth: Some(exchanger_auth),
            ..self.payload(ActionKind::FoundryExchangeInitiated)?
        };
        self.submit_payload(payload, to, U256::zero()).await
    }

    /// Exchanger matches a buyer with a minted listing it hosts itself (type 20).
    #[instrument(skip(self, buyer, seller1))]
    pub async fn nft_does_not_authorize_exchanges(
        &self,
        buyer: RoleAuthorization<BuyerMessage>,
        seller1: RoleAuthorization<Seller1Message>,
        to: Address,
    ) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            buyer: Some(buyer),
            seller1: Some(seller1),
            ..self.payload(ActionKind::NftDoesNotAuthorizeExchanges)?
        };
        self.submit_payload(payload, to, U256::zero()).await
    }

    /// Exchanger settles a sell order on behalf of both sides (type 27).
    #[instrument(skip(self, buyer, seller1, buyer_auth, seller_auth, exchanger_auth))]
    pub async fn batch_sell_transfer(
        &self,
        buyer: RoleAuthorization<BuyerMessage>,
        seller1: RoleAuthorization<Seller1Message>,
        buyer_auth: RoleAuthorization<BuyerAuthMessage>,
        seller_auth: RoleAuthorization<SellerAuthMessage>,
        exchanger_auth: RoleAuthorization<ExchangerAuthMessage>,
        to: Address,
    ) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            buyer: Some(buyer),
            seller1: Some(seller1),
            buyer_auth: Some(buyer_auth),
            seller_auth: Some(seller_auth),
            exchanger_auth: Some(exchanger_auth),
            ..self.payload(ActionKind::BatchSellTransfer)?
        };
        self.submit_payload(payload, to, U256::zero()).await
    }

    /// Exchanger fills a standing buy order (type 28).
    #[instrument(skip(self, buyer, buyer_auth, exchanger_auth))]
    pub async fn force_buying_transfer(
        &self,
        buyer: RoleAuthorization<BuyerMessage>,
        buyer_auth: RoleAuthorization<BuyerAuthMessage>,
        exchanger_auth: RoleAuthorization<ExchangerAuthMessage>,
        to: Address,
    ) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            buyer: Some(buyer),
            buyer_auth: Some(buyer_auth),
            exchanger_auth: Some(exchanger_auth),
            ..self.payload(ActionKind::ForceBuyingTransfer)?
        };
        self.submit_payload(payload, to, U256::zero()).await
    }
}
