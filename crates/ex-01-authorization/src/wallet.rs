//! # Wallet
//!
//! Holds one account key and signs role messages with it. A wallet never
//! talks to the node; fields that depend on chain state (deadlines) are
//! filled in by the caller or by the dispatch layer.

use crate::domain::authorization::RoleAuthorization;
use crate::domain::errors::AuthorizationError;
use crate::domain::message::SignableMessage;
use crate::domain::roles::{
    BuyerAuthMessage, BuyerMessage, DelegateMessage, ExchangerAuthMessage, RoleMessage,
    Seller1Message, Seller2Message, SellerAuthMessage,
};
use shared_crypto::{text_hash, RecoverableSignature, Secp256k1KeyPair};
use shared_types::Address;
use std::fmt;
use tracing::debug;

/// Role signer bound to a single key.
#[derive(Clone)]
pub struct Wallet {
    keypair: Secp256k1KeyPair,
}

impl Wallet {
    /// Load from a hex private key (`0x` optional).
    pub fn from_private_key(private_key: &str) -> Result<Self, AuthorizationError> {
        let keypair = Secp256k1KeyPair::from_hex(private_key)?;
        Ok(Self { keypair })
    }

    pub fn from_keypair(keypair: Secp256k1KeyPair) -> Self {
        Self { keypair }
    }

    pub fn keypair(&self) -> &Secp256k1KeyPair {
        &self.keypair
    }

    pub fn address(&self) -> Address {
        Address::from(self.keypair.address())
    }

    /// Sign an already-built canonical message.
    pub fn sign_message(
        &self,
        message: &SignableMessage,
    ) -> Result<RecoverableSignature, AuthorizationError> {
        let digest = message.digest();
        let signature = self.keypair.sign_prehash(&digest)?;
        debug!(
            role = %message.role(),
            signer = ?self.address(),
            "Signed role message"
        );
        Ok(signature)
    }

    /// Sign any role message and package it for transport.
    pub fn sign_role<M: RoleMessage>(
        &self,
        message: M,
    ) -> Result<RoleAuthorization<M>, AuthorizationError> {
        let signature = self.sign_message(&message.signable())?;
        Ok(RoleAuthorization::assemble(message, &signature))
    }

    pub fn sign_buyer(
        &self,
        message: BuyerMessage,
    ) -> Result<RoleAuthorization<BuyerMessage>, AuthorizationError> {
        self.sign_role(message)
    }

    pub fn sign_seller1(
        &self,
        message: Seller1Message,
    ) -> Result<RoleAuthorization<Seller1Message>, AuthorizationError> {
        self.sign_role(message)
    }

    pub fn sign_seller2(
        &self,
        message: Seller2Message,
    ) -> Result<RoleAuthorization<Seller2Message>, AuthorizationError> {
        self.sign_role(message)
    }

    pub fn sign_exchanger_auth(
        &self,
        message: ExchangerAuthMessage,
    ) -> Result<RoleAuthorization<ExchangerAuthMessage>, AuthorizationError> {
        self.sign_role(message)
    }

    pub fn sign_buyer_auth(
        &self,
        message: BuyerAuthMessage,
    ) -> Result<RoleAuthorization<BuyerAuthMessage>, AuthorizationError> {
        self.sign_role(message)
    }

    pub fn sign_seller_auth(
        &self,
        message: SellerAuthMessage,
    ) -> Result<RoleAuthorization<SellerAuthMessage>, AuthorizationError> {
        self.sign_role(message)
    }

    /// Delegation is transported as a bare signature (the `proxy_sign`
    /// parameter of pledge and delegate actions), not as an authorization.
    pub fn sign_delegate(
        &self,
        message: &DelegateMessage,
    ) -> Result<RecoverableSignature, AuthorizationError> {
        self.sign_message(&message.signable())
    }

    /// Text-hash and sign arbitrary bytes.
    pub fn sign_raw(&self, data: &[u8]) -> Result<RecoverableSignature, AuthorizationError> {
        Ok(self.keypair.sign_prehash(&text_hash(data))?)
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}
