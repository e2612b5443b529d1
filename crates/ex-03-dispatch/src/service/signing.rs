//! Role signing with deadlines derived from the current chain height.
//!
//! Every role message carries a `block_number` after which the node
//! rejects it. These helpers read the height, add the configured
//! `deadline_offset` and sign with the caller's wallet. Signing itself is
//! local; only the height lookup touches the node.

use crate::errors::ExchangeError;
use crate::service::ExchangeClient;
use ex_01_authorization::{
    BuyerAuthMessage, BuyerMessage, ExchangerAuthMessage, RoleAuthorization, Seller1Message,
    Seller2Message, SellerAuthMessage,
};
use ex_02_rpc_gateway::RpcGateway;
use shared_types::encoding::hex_quantity;
use tracing::{debug, instrument};

impl<G: RpcGateway> ExchangeClient<G> {
    /// Current height plus the configured offset, as a hex quantity.
    pub async fn block_deadline(&self) -> Result<String, ExchangeError> {
        let height = self.gateway.block_number().await?;
        let deadline = hex_quantity(height.saturating_add(self.config.deadline_offset));
        debug!(height, %deadline, "Derived authorization deadline");
        Ok(deadline)
    }

    /// Offer to buy `nft_address` for `amount`. `seller` may be empty.
    #[instrument(skip(self))]
    pub async fn sign_buyer_until_deadline(
        &self,
        amount: &str,
        nft_address: &str,
        exchanger: &str,
        seller: &str,
    ) -> Result<RoleAuthorization<BuyerMessage>, ExchangeError> {
        let deadline = self.block_deadline().await?;
        let message = BuyerMessage::new(amount, nft_address, exchanger, deadline, seller);
        Ok(self.wallet.sign_buyer(message)?)
    }

    /// List a minted NFT for `amount`.
    #[instrument(skip(self))]
    pub async fn sign_seller1_until_deadline(
        &self,
        amount: &str,
        nft_address: &str,
        exchanger: &str,
    ) -> Result<RoleAuthorization<Seller1Message>, ExchangeError> {
        let deadline = self.block_deadline().await?;
        let message = Seller1Message::new(amount, nft_address, exchanger, deadline);
        Ok(self.wallet.sign_seller1(message)?)
    }

    /// List a not-yet-minted NFT for `amount`.
    #[instrument(skip(self))]
    pub async fn sign_seller2_until_deadline(
        &self,
        amount: &str,
        royalty: &str,
        meta_url: &str,
        exclusive_flag: &str,
        exchanger: &str,
    ) -> Result<RoleAuthorization<Seller2Message>, ExchangeError> {
        let deadline = self.block_deadline().await?;
        let message =
            Seller2Message::new(amount, royalty, meta_url, exclusive_flag, exchanger, deadline);
        Ok(self.wallet.sign_seller2(message)?)
    }

    /// Let `to` settle trades on behalf of the exchange owned by
    /// `exchanger_owner`.
    #[instrument(skip(self))]
    pub async fn sign_exchanger_auth_until_deadline(
        &self,
        exchanger_owner: &str,
        to: &str,
    ) -> Result<RoleAuthorization<ExchangerAuthMessage>, ExchangeError> {
        let deadline = self.block_deadline().await?;
        let message = ExchangerAuthMessage::new(exchanger_owner, to, deadline);
        Ok(self.wallet.sign_exchanger_auth(message)?)
    }

    #[instrument(skip(self))]
    pub async fn sign_buyer_auth_until_deadline(
        &self,
        exchanger: &str,
    ) -> Result<RoleAuthorization<BuyerAuthMessage>, ExchangeError> {
        let deadline = self.block_deadline().await?;
        Ok(self
            .wallet
            .sign_buyer_auth(BuyerAuthMessage::new(exchanger, deadline))?)
    }

    #[instrument(skip(self))]
    pub async fn sign_seller_auth_until_deadline(
        &self,
        exchanger: &str,
    ) -> Result<RoleAuthorization<SellerAuthMessage>, ExchangeError> {
        let deadline = self.block_deadline().await?;
        Ok(self
            .wallet
            .sign_seller_auth(SellerAuthMessage::new(exchanger, deadline))?)
    }
}
