//! Pledges, exchange lifecycle, delegation and account maintenance.
//!
//! All of these are sent to the caller's own address. Pledge operations
//! move `value` wei between the caller's balance and its pledge; the rest
//! carry nothing.

use crate::errors::ExchangeError;
use crate::service::ExchangeClient;
use ex_01_authorization::{ActionKind, WormholesPayload};
use ex_02_rpc_gateway::RpcGateway;
use shared_crypto::RecoverableSignature;
use shared_types::{Hash, U256};
use tracing::instrument;

impl<G: RpcGateway> ExchangeClient<G> {
    /// Pledge `value` and register as an exchange (type 9).
    ///
    /// `proxy_sign` is the delegate signature of the account that will
    /// operate on the caller's behalf; pass `None` to pledge without one.
    #[instrument(skip(self, proxy_sign))]
    pub async fn token_pledge(
        &self,
        proxy_address: &str,
        proxy_sign: Option<&RecoverableSignature>,
        name: &str,
        url: &str,
        fee_rate: u32,
        value: U256,
    ) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            proxy_address: Some(proxy_address.to_string()),
            proxy_sign: Some(proxy_sign.map(RecoverableSignature::to_hex).unwrap_or_default()),
            name: Some(name.to_string()),
            url: Some(url.to_string()),
            fee_rate: Some(fee_rate),
            ..self.payload(ActionKind::TokenPledge)?
        };
        self.submit_payload(payload, self.address(), value).await
    }

    /// Withdraw `value` from the pledge (type 10).
    #[instrument(skip(self))]
    pub async fn token_revokes_pledge(&self, value: U256) -> Result<Hash, ExchangeError> {
        self.caller_action(ActionKind::TokenRevokesPledge, value).await
    }

    /// Open an exchange on a pledged account (type 11).
    #[instrument(skip(self))]
    pub async fn open(&self, fee_rate: u32, name: &str, url: &str) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            fee_rate: Some(fee_rate),
            name: Some(name.to_string()),
            url: Some(url.to_string()),
            ..self.payload(ActionKind::Open)?
        };
        self.submit_payload(payload, self.address(), U256::zero())
            .await
    }

    /// Close the caller's exchange (type 12).
    #[instrument(skip(self))]
    pub async fn close(&self) -> Result<Hash, ExchangeError> {
        self.caller_action(ActionKind::Close, U256::zero()).await
    }

    /// Top up an existing pledge (type 21).
    #[instrument(skip(self))]
    pub async fn additional_pledge_amount(&self, value: U256) -> Result<Hash, ExchangeError> {
        self.caller_action(ActionKind::AdditionalPledgeAmount, value)
            .await
    }

    /// Partially withdraw a pledge (type 22).
    #[instrument(skip(self))]
    pub async fn revokes_pledge_amount(&self, value: U256) -> Result<Hash, ExchangeError> {
        self.caller_action(ActionKind::RevokesPledgeAmount, value).await
    }

    /// Switch the account's revenue model (type 25).
    #[instrument(skip(self))]
    pub async fn unfrozen_account(&self) -> Result<Hash, ExchangeError> {
        self.caller_action(ActionKind::UnfrozenAccount, U256::zero())
            .await
    }

    /// Restore the validator weight coefficient (type 26).
    #[instrument(skip(self))]
    pub async fn weight_redemption(&self) -> Result<Hash, ExchangeError> {
        self.caller_action(ActionKind::WeightRedemption, U256::zero())
            .await
    }

    /// Withdraw ERB held by a level-3 SNFT address (type 29).
    #[instrument(skip(self))]
    pub async fn extract_erb(&self) -> Result<Hash, ExchangeError> {
        self.caller_action(ActionKind::ExtractErb, U256::zero()).await
    }

    /// Delegate the caller's pledge to `proxy_address` (type 31).
    #[instrument(skip(self, proxy_sign))]
    pub async fn account_delegate(
        &self,
        proxy_sign: &RecoverableSignature,
        proxy_address: &str,
    ) -> Result<Hash, ExchangeError> {
        let payload = WormholesPayload {
            proxy_sign: Some(proxy_sign.to_hex()),
            proxy_address: Some(proxy_address.to_string()),
            ..self.payload(ActionKind::AccountDelegate)?
        };
        self.submit_payload(payload, self.address(), U256::zero())
            .await
    }

    /// Payload with no parameters, sent to the caller.
    async fn caller_action(&self, kind: ActionKind, value: U256) -> Result<Hash, ExchangeError> {
        let payload = self.payload(kind)?;
        self.submit_payload(payload, self.address(), value).await
    }
}
