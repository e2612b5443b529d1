//! # ECDSA Signatures (secp256k1, recoverable)
//!
//! Ethereum-compatible signing: a 32-byte prehash is signed with RFC 6979
//! deterministic nonces and returned as `r ‖ s ‖ v` (65 bytes).
//!
//! ## Recovery byte normalization
//!
//! The raw recovery id produced by the curve arithmetic is 0 or 1. Before a
//! signature leaves this module it is shifted into the 27/28 convention by
//! [`RecoverableSignature::from_parts`]. That is the only place the byte is
//! touched; nothing downstream adjusts it.

use crate::hashing::{keccak256, Hash};
use crate::CryptoError;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use std::fmt;
use zeroize::Zeroize;

/// Ethereum-style address (last 20 bytes of keccak256(pubkey)).
pub type Address = [u8; 20];

/// Offset added to the raw recovery id on the wire.
pub const RECOVERY_ID_OFFSET: u8 = 27;

/// 65-byte recoverable signature: `r (32) ‖ s (32) ‖ v (1)`, `v ∈ {27, 28}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecoverableSignature([u8; 65]);

impl RecoverableSignature {
    /// Encoded length in bytes.
    pub const LEN: usize = 65;

    /// Assemble from the curve output, normalizing the recovery id into 27/28.
    pub fn from_parts(signature: &Signature, recovery_id: RecoveryId) -> Self {
        let mut bytes = [0u8; 65];
        bytes[..64].copy_from_slice(&signature.to_bytes());
        bytes[64] = recovery_id.to_byte() + RECOVERY_ID_OFFSET;
        Self(bytes)
    }

    /// Parse 65 raw bytes. A raw 0/1 recovery byte is lifted to 27/28.
    pub fn from_bytes(mut bytes: [u8; 65]) -> Result<Self, CryptoError> {
        bytes[64] = match bytes[64] {
            0 | 1 => bytes[64] + RECOVERY_ID_OFFSET,
            27 | 28 => bytes[64],
            other => return Err(CryptoError::InvalidRecoveryId(other)),
        };
        Signature::from_slice(&bytes[..64])
            .map_err(|e| CryptoError::InvalidSignatureFormat(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Parse from a byte slice that must be exactly 65 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let array: [u8; 65] = bytes.try_into().map_err(|_| {
            CryptoError::InvalidSignatureFormat(format!(
                "expected {} bytes, got {}",
                Self::LEN,
                bytes.len()
            ))
        })?;
        Self::from_bytes(array)
    }

    /// Parse `0x`-prefixed (or bare) hex.
    pub fn from_hex(text: &str) -> Result<Self, CryptoError> {
        let digits = text.strip_prefix("0x").unwrap_or(text);
        let bytes =
            hex::decode(digits).map_err(|e| CryptoError::InvalidSignatureFormat(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// `0x`-prefixed lowercase hex of all 65 bytes.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 65] {
        &self.0
    }

    /// R component.
    pub fn r(&self) -> [u8; 32] {
        let mut r = [0u8; 32];
        r.copy_from_slice(&self.0[..32]);
        r
    }

    /// S component.
    pub fn s(&self) -> [u8; 32] {
        let mut s = [0u8; 32];
        s.copy_from_slice(&self.0[32..64]);
        s
    }

    /// Recovery byte in the 27/28 convention.
    pub fn v(&self) -> u8 {
        self.0[64]
    }

    /// Raw recovery id (0/1) for curve operations.
    pub fn recovery_id(&self) -> Result<RecoveryId, CryptoError> {
        let v = self.v();
        v.checked_sub(RECOVERY_ID_OFFSET)
            .and_then(RecoveryId::from_byte)
            .ok_or(CryptoError::InvalidRecoveryId(v))
    }

    /// Recover the signer's verifying key from the signed prehash.
    pub fn recover_verifying_key(&self, prehash: &Hash) -> Result<VerifyingKey, CryptoError> {
        let signature = Signature::from_slice(&self.0[..64])
            .map_err(|e| CryptoError::InvalidSignatureFormat(e.to_string()))?;
        VerifyingKey::recover_from_prehash(prehash, &signature, self.recovery_id()?)
            .map_err(|_| CryptoError::RecoveryFailed)
    }

    /// Recover the signer's address from the signed prehash.
    pub fn recover_address(&self, prehash: &Hash) -> Result<Address, CryptoError> {
        let key = self.recover_verifying_key(prehash)?;
        Ok(address_from_verifying_key(&key))
    }
}

impl fmt::Debug for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecoverableSignature")
            .field(&self.to_hex())
            .finish()
    }
}

/// Derive the Ethereum address of a public key.
pub fn address_from_verifying_key(key: &VerifyingKey) -> Address {
    let encoded = key.to_encoded_point(false);
    // Keccak256 of the uncompressed point without the 0x04 tag
    let hash = keccak256(&encoded.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// secp256k1 ECDSA keypair.
///
/// The inner `SigningKey` zeroizes its scalar on drop.
#[derive(Clone)]
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Private key length in bytes.
    pub const SECRET_LEN: usize = 32;

    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != Self::SECRET_LEN {
            return Err(CryptoError::InvalidKeyLength {
                expected: Self::SECRET_LEN,
                actual: bytes.len(),
            });
        }
        let signing_key = SigningKey::from_slice(bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Create from a hex scalar, with or without `0x`.
    pub fn from_hex(text: &str) -> Result<Self, CryptoError> {
        let digits = text.trim().strip_prefix("0x").unwrap_or(text.trim());
        let mut bytes =
            hex::decode(digits).map_err(|e| CryptoError::InvalidKeyEncoding(e.to_string()))?;
        let result = Self::from_bytes(&bytes);
        bytes.zeroize();
        result
    }

    /// Verifying (public) key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Address controlled by this key.
    pub fn address(&self) -> Address {
        address_from_verifying_key(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte prehash (deterministic RFC 6979, low-S).
    pub fn sign_prehash(&self, prehash: &Hash) -> Result<RecoverableSignature, CryptoError> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(prehash)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
        Ok(RecoverableSignature::from_parts(&signature, recovery_id))
    }
}

impl fmt::Debug for Secp256k1KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1KeyPair")
            .field("address", &format!("0x{}", hex::encode(self.address())))
            .finish_non_exhaustive()
    }
}
