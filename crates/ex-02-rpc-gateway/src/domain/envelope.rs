//! # Legacy Transaction Envelope
//!
//! Exchange actions ride in ordinary pre-EIP-2718 transactions with EIP-155
//! replay protection:
//!
//! ```text
//! signing hash = keccak256(rlp([nonce, gasPrice, gasLimit, to, value, data, chainId, 0, 0]))
//! raw          = rlp([nonce, gasPrice, gasLimit, to, value, data, v, r, s])
//! v            = recovery_id + chainId * 2 + 35
//! ```
//!
//! Transactions read back from the node arrive as JSON objects
//! ([`RpcTransaction`]) and convert into the same [`SignedTransaction`].

use crate::domain::errors::GatewayError;
use primitive_types::U256;
use rlp::{Decodable, DecoderError, Rlp, RlpStream};
use serde::{Deserialize, Serialize};
use shared_crypto::{keccak256, CryptoError, RecoverableSignature, Secp256k1KeyPair};
use shared_types::encoding::{decode_hex_bytes, encode_hex_bytes};
use shared_types::{Address, Hash, Quantity};

const EIP155_V_OFFSET: u64 = 35;
const DECODE_CONTEXT: &str = "decode_raw_transaction";

fn rlp_error(field: &str, e: DecoderError) -> GatewayError {
    GatewayError::decode(DECODE_CONTEXT, format!("RLP error in {}: {:?}", field, e))
}

fn val_at<T: Decodable>(rlp: &Rlp, index: usize, field: &str) -> Result<T, GatewayError> {
    rlp.val_at(index).map_err(|e| rlp_error(field, e))
}

/// Unsigned legacy transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyTransaction {
    pub nonce: u64,
    pub gas_price: U256,
    pub gas_limit: u64,
    pub to: Address,
    pub value: U256,
    pub data: Vec<u8>,
}

impl LegacyTransaction {
    fn append_body(&self, stream: &mut RlpStream) {
        stream.append(&self.nonce);
        stream.append(&self.gas_price);
        stream.append(&self.gas_limit);
        stream.append(&self.to);
        stream.append(&self.value);
        stream.append(&self.data);
    }

    /// RLP of the EIP-155 signing preimage.
    pub fn signing_payload(&self, chain_id: u64) -> Vec<u8> {
        let mut stream = RlpStream::new_list(9);
        self.append_body(&mut stream);
        stream.append(&chain_id);
        stream.append(&0u8);
        stream.append(&0u8);
        stream.out().to_vec()
    }

    pub fn signing_hash(&self, chain_id: u64) -> [u8; 32] {
        keccak256(&self.signing_payload(chain_id))
    }

    /// Sign for `chain_id`.
    pub fn sign(
        self,
        keypair: &Secp256k1KeyPair,
        chain_id: u64,
    ) -> Result<SignedTransaction, GatewayError> {
        let signature = keypair.sign_prehash(&self.signing_hash(chain_id))?;
        let recovery_id = u64::from(signature.recovery_id()?.to_byte());
        let v = chain_id
            .checked_mul(2)
            .and_then(|doubled| doubled.checked_add(EIP155_V_OFFSET))
            .and_then(|base| base.checked_add(recovery_id))
            .ok_or_else(|| {
                CryptoError::SigningFailed(format!(
                    "chain id {} does not fit an EIP-155 v value",
                    chain_id
                ))
            })?;
        Ok(SignedTransaction {
            v,
            r: U256::from_big_endian(&signature.r()),
            s: U256::from_big_endian(&signature.s()),
            tx: self,
        })
    }
}

/// Legacy transaction with its EIP-155 signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedTransaction {
    pub tx: LegacyTransaction,
    pub v: u64,
    pub r: U256,
    pub s: U256,
}

impl SignedTransaction {
    /// Bytes for `eth_sendRawTransaction`.
    pub fn raw(&self) -> Vec<u8> {
        let mut stream = RlpStream::new_list(9);
        self.tx.append_body(&mut stream);
        stream.append(&self.v);
        stream.append(&self.r);
        stream.append(&self.s);
        stream.out().to_vec()
    }

    /// Hash the node will report for this transaction.
    pub fn hash(&self) -> Hash {
        Hash::from(keccak256(&self.raw()))
    }

    /// Parse raw bytes produced by [`raw`](Self::raw).
    pub fn decode(raw: &[u8]) -> Result<Self, GatewayError> {
        let rlp = Rlp::new(raw);
        if !rlp.is_list() {
            return Err(GatewayError::decode(DECODE_CONTEXT, "transaction must be an RLP list"));
        }
        let item_count = rlp.item_count().map_err(|e| rlp_error("item count", e))?;
        if item_count != 9 {
            return Err(GatewayError::decode(
                DECODE_CONTEXT,
                format!("legacy transaction must have 9 fields, got {}", item_count),
            ));
        }

        Ok(Self {
            tx: LegacyTransaction {
                nonce: val_at(&rlp, 0, "nonce")?,
                gas_price: val_at(&rlp, 1, "gas_price")?,
                gas_limit: val_at(&rlp, 2, "gas_limit")?,
                to: val_at(&rlp, 3, "to")?,
                value: val_at(&rlp, 4, "value")?,
                data: val_at(&rlp, 5, "data")?,
            },
            v: val_at(&rlp, 6, "v")?,
            r: val_at(&rlp, 7, "r")?,
            s: val_at(&rlp, 8, "s")?,
        })
    }

    /// Chain id encoded in `v`.
    pub fn chain_id(&self) -> Option<u64> {
        self.v
            .checked_sub(EIP155_V_OFFSET)
            .map(|offset| offset / 2)
    }

    /// Address that signed this transaction.
    pub fn recover_sender(&self) -> Result<Address, GatewayError> {
        let chain_id = self
            .chain_id()
            .ok_or_else(|| GatewayError::decode("recover_sender", "v is not EIP-155"))?;
        let recovery_id = (self.v - EIP155_V_OFFSET - chain_id * 2) as u8;

        let mut bytes = [0u8; 65];
        self.r.to_big_endian(&mut bytes[..32]);
        self.s.to_big_endian(&mut bytes[32..64]);
        bytes[64] = recovery_id;

        let signature = RecoverableSignature::from_bytes(bytes)?;
        let sender = signature.recover_address(&self.tx.signing_hash(chain_id))?;
        Ok(Address::from(sender))
    }
}

/// Transaction object returned by `eth_getTransactionBy*` queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    pub nonce: Quantity,
    pub gas_price: Quantity,
    pub gas: Quantity,
    pub to: Option<Address>,
    pub value: Quantity,
    pub input: String,
    pub v: Option<Quantity>,
    pub r: Option<Quantity>,
    pub s: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<Hash>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
}

impl From<&SignedTransaction> for RpcTransaction {
    fn from(signed: &SignedTransaction) -> Self {
        Self {
            nonce: Quantity::from(signed.tx.nonce),
            gas_price: Quantity(signed.tx.gas_price),
            gas: Quantity::from(signed.tx.gas_limit),
            to: Some(signed.tx.to),
            value: Quantity(signed.tx.value),
            input: encode_hex_bytes(&signed.tx.data),
            v: Some(Quantity::from(signed.v)),
            r: Some(Quantity(signed.r)),
            s: Some(Quantity(signed.s)),
            block_hash: None,
            from: None,
        }
    }
}

impl SignedTransaction {
    /// Convert a node-reported transaction. `method` names the query in errors.
    ///
    /// Contract creations and unsigned transactions are `Decode` errors.
    pub fn from_rpc(method: &str, rpc: RpcTransaction) -> Result<Self, GatewayError> {
        let (v, r, s) = match (rpc.v, rpc.r, rpc.s) {
            (Some(v), Some(r), Some(s)) if !(r.0.is_zero() && s.0.is_zero()) => (v, r, s),
            _ => {
                return Err(GatewayError::decode(
                    method,
                    "server returned transaction without signature",
                ))
            }
        };
        let narrow = |field: &str, q: Quantity| {
            q.to_u64().ok_or_else(|| {
                GatewayError::decode(method, format!("{} {} does not fit in u64", field, q))
            })
        };
        let to = rpc
            .to
            .ok_or_else(|| GatewayError::decode(method, "contract creation is not supported"))?;

        Ok(Self {
            tx: LegacyTransaction {
                nonce: narrow("nonce", rpc.nonce)?,
                gas_price: rpc.gas_price.into_inner(),
                gas_limit: narrow("gas", rpc.gas)?,
                to,
                value: rpc.value.into_inner(),
                data: decode_hex_bytes(&rpc.input).map_err(|e| GatewayError::decode(method, e))?,
            },
            v: narrow("v", v)?,
            r: r.into_inner(),
            s: s.into_inner(),
        })
    }
}
