//! # Authorization Assembler
//!
//! A [`RoleAuthorization`] is a role message plus the hex signature over
//! its canonical digest. It serializes flat:
//!
//! ```json
//! {"amount":"0x38d7ea4c68000","nft_address":"0x...03","exchanger":"0x8b07...","block_number":"0x677","sig":"0x...1b"}
//! ```
//!
//! Assembly never re-verifies. Parties that receive an authorization from
//! someone else can call [`RoleAuthorization::verify_signer`] before
//! spending gas on it.

use crate::domain::errors::AuthorizationError;
use crate::domain::message::{RoleKind, SignableMessage};
use crate::domain::roles::RoleMessage;
use serde::{Deserialize, Serialize};
use shared_crypto::RecoverableSignature;
use shared_types::Address;

/// Role fields and the signature over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAuthorization<M> {
    #[serde(flatten)]
    pub message: M,
    /// `0x` + 130 hex chars (`r ‖ s ‖ v`)
    pub sig: String,
}

impl<M: RoleMessage> RoleAuthorization<M> {
    /// Package a message with the signature produced over its digest.
    pub fn assemble(message: M, signature: &RecoverableSignature) -> Self {
        Self {
            message,
            sig: signature.to_hex(),
        }
    }

    pub fn role(&self) -> RoleKind {
        M::KIND
    }

    /// The positional form the signature covers.
    pub fn signable(&self) -> SignableMessage {
        self.message.signable()
    }

    /// Decoded signature.
    pub fn signature(&self) -> Result<RecoverableSignature, AuthorizationError> {
        Ok(RecoverableSignature::from_hex(&self.sig)?)
    }

    /// Transport encoding.
    pub fn to_json(&self) -> Result<String, AuthorizationError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse an authorization produced by another party.
    ///
    /// Every schema field must be present, empty ones included.
    pub fn from_json(json: &str) -> Result<Self, AuthorizationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Address that produced `sig` over this message's fields.
    pub fn recover_signer(&self) -> Result<Address, AuthorizationError> {
        let digest = self.signable().digest();
        let address = self.signature()?.recover_address(&digest)?;
        Ok(Address::from(address))
    }

    /// Check that `expected` signed exactly these fields.
    pub fn verify_signer(&self, expected: &Address) -> Result<(), AuthorizationError> {
        let actual = self.recover_signer()?;
        if &actual != expected {
            tracing::warn!(role = %M::KIND, ?expected, ?actual, "Authorization signer mismatch");
            return Err(AuthorizationError::SignerMismatch {
                expected: *expected,
                actual,
            });
        }
        Ok(())
    }
}
