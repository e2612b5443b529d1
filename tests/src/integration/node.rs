//! # Simulated Node
//!
//! In-memory chain shared by every client in a scenario; clones share
//! state. Before executing a transaction it checks what the real node
//! checks: chain id, sender nonce and balance, and for each embedded
//! authorization its deadline and recovered signer. An exchanger
//! authorization must also name the sender as its `to` and be signed by
//! its `exchanger_owner`.
//!
//! Accepted transactions are mined at once, one per block. Gas is not
//! charged.

use async_trait::async_trait;
use ex_01_authorization::{
    RoleAuthorization, RoleKind, RoleMessage, WormholesPayload, PAYLOAD_PREFIX,
};
use ex_02_rpc_gateway::{GatewayError, RpcGateway, RpcTransaction, SignedTransaction};
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared_types::encoding::{
    decode_hex_bytes, hex_quantity, parse_address, parse_hash, parse_hex_u64,
};
use shared_types::{Address, Hash, Quantity, TransactionReceipt, U256};
use std::collections::HashMap;
use std::sync::Arc;

pub const CHAIN_ID: u64 = 51888;
pub const GENESIS_HEIGHT: u64 = 0x670;
pub const GAS_PRICE: u64 = 1_000_000_000;

/// Node-side error code for rejected transactions.
pub const REJECTED: i32 = -32000;

/// A transaction the node accepted, with what it learned while checking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedAction {
    pub hash: Hash,
    pub block_number: u64,
    pub from: Address,
    pub transaction: SignedTransaction,
    pub payload: Option<WormholesPayload>,
    /// Recovered signer of each embedded authorization, in payload order.
    pub signers: Vec<(RoleKind, Address)>,
}

#[derive(Default)]
struct ChainState {
    height: u64,
    nonces: HashMap<Address, u64>,
    balances: HashMap<Address, U256>,
    receipts: HashMap<Hash, TransactionReceipt>,
    executed: Vec<ExecutedAction>,
}

#[derive(Clone)]
pub struct SimulatedNode {
    state: Arc<Mutex<ChainState>>,
}

impl Default for SimulatedNode {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedNode {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ChainState {
                height: GENESIS_HEIGHT,
                ..ChainState::default()
            })),
        }
    }

    pub fn fund(&self, account: Address, amount: U256) {
        let mut state = self.state.lock();
        let balance = state.balances.entry(account).or_default();
        *balance = balance.saturating_add(amount);
    }

    pub fn height(&self) -> u64 {
        self.state.lock().height
    }

    /// Advance the chain without transactions.
    pub fn mine(&self, blocks: u64) {
        self.state.lock().height += blocks;
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.state
            .lock()
            .balances
            .get(&account)
            .copied()
            .unwrap_or_default()
    }

    pub fn nonce_of(&self, account: Address) -> u64 {
        self.state.lock().nonces.get(&account).copied().unwrap_or(0)
    }

    pub fn executed(&self) -> Vec<ExecutedAction> {
        self.state.lock().executed.clone()
    }

    pub fn last_executed(&self) -> Option<ExecutedAction> {
        self.state.lock().executed.last().cloned()
    }

    /// Validate and mine `raw`. `Err` carries the rejection reason.
    fn execute(&self, raw: &[u8]) -> Result<Hash, String> {
        let transaction = SignedTransaction::decode(raw).map_err(|e| e.to_string())?;
        if transaction.chain_id() != Some(CHAIN_ID) {
            return Err(format!("invalid chain id {:?}", transaction.chain_id()));
        }
        let from = transaction
            .recover_sender()
            .map_err(|e| format!("invalid sender: {}", e))?;

        let mut state = self.state.lock();

        let expected_nonce = state.nonces.get(&from).copied().unwrap_or(0);
        if transaction.tx.nonce != expected_nonce {
            return Err(format!(
                "invalid nonce: have {}, want {}",
                transaction.tx.nonce, expected_nonce
            ));
        }

        let available = state.balances.get(&from).copied().unwrap_or_default();
        if available < transaction.tx.value {
            return Err("insufficient funds for gas * price + value".to_string());
        }

        let (payload, signers) = if transaction.tx.data.starts_with(PAYLOAD_PREFIX) {
            let payload = WormholesPayload::from_tx_data(&transaction.tx.data)
                .map_err(|e| format!("invalid payload: {}", e))?;
            payload
                .validate()
                .map_err(|e| format!("invalid payload: {}", e))?;
            let signers = verify_roles(&payload, from, state.height)?;
            (Some(payload), signers)
        } else {
            (None, Vec::new())
        };

        let to = transaction.tx.to;
        let value = transaction.tx.value;
        if to != from {
            state.balances.insert(from, available - value);
            let credited = state.balances.entry(to).or_default();
            *credited = credited.saturating_add(value);
        }

        state.height += 1;
        let block_number = state.height;
        let hash = transaction.hash();
        state.nonces.insert(from, expected_nonce + 1);
        state.receipts.insert(
            hash,
            TransactionReceipt {
                transaction_hash: hash,
                transaction_index: Some(Quantity::ZERO),
                block_hash: Some(block_hash(block_number)),
                block_number: Some(Quantity::from(block_number)),
                from: Some(from),
                to: Some(to),
                cumulative_gas_used: Some(Quantity::from(21_000u64)),
                gas_used: Some(Quantity::from(21_000u64)),
                contract_address: None,
                status: Some(Quantity::from(1u64)),
                logs: Vec::new(),
            },
        );
        state.executed.push(ExecutedAction {
            hash,
            block_number,
            from,
            transaction,
            payload,
            signers,
        });
        Ok(hash)
    }
}

/// Synthetic hash of the block at `number`.
pub fn block_hash(number: u64) -> Hash {
    Hash::from_low_u64_be(number)
}

fn verify_roles(
    payload: &WormholesPayload,
    sender: Address,
    height: u64,
) -> Result<Vec<(RoleKind, Address)>, String> {
    let mut signers = Vec::new();
    if let Some(auth) = &payload.buyer {
        signers.push(verify(auth, &auth.message.block_number, height)?);
    }
    if let Some(auth) = &payload.seller1 {
        signers.push(verify(auth, &auth.message.block_number, height)?);
    }
    if let Some(auth) = &payload.seller2 {
        signers.push(verify(auth, &auth.message.block_number, height)?);
    }
    if let Some(auth) = &payload.buyer_auth {
        signers.push(verify(auth, &auth.message.block_number, height)?);
    }
    if let Some(auth) = &payload.seller_auth {
        signers.push(verify(auth, &auth.message.block_number, height)?);
    }
    if let Some(auth) = &payload.exchanger_auth {
        let (role, signer) = verify(auth, &auth.message.block_number, height)?;
        let owner = parse_address(&auth.message.exchanger_owner).map_err(|e| e.to_string())?;
        if signer != owner {
            return Err(format!("exchanger_auth not signed by owner {:?}", owner));
        }
        let delegate = parse_address(&auth.message.to).map_err(|e| e.to_string())?;
        if delegate != sender {
            return Err(format!("exchanger_auth is for {:?}, not the sender", delegate));
        }
        signers.push((role, signer));
    }
    Ok(signers)
}

fn verify<M: RoleMessage>(
    auth: &RoleAuthorization<M>,
    deadline: &str,
    height: u64,
) -> Result<(RoleKind, Address), String> {
    let role = auth.role();
    let deadline = parse_hex_u64(deadline).map_err(|e| format!("{} deadline: {}", role, e))?;
    if deadline < height {
        return Err(format!("{} authorization expired at block {}", role, deadline));
    }
    let signer = auth
        .recover_signer()
        .map_err(|e| format!("{} signature: {}", role, e))?;
    Ok((role, signer))
}

fn str_param<'a>(method: &str, params: &'a [Value], index: usize) -> Result<&'a str, GatewayError> {
    params
        .get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| invalid_params(method, format!("missing string parameter {}", index)))
}

fn invalid_params(method: &str, message: String) -> GatewayError {
    GatewayError::Rpc {
        method: method.to_string(),
        code: -32602,
        message,
    }
}

#[async_trait]
impl RpcGateway for SimulatedNode {
    async fn invoke(&self, method: &str, params: Vec<Value>) -> Result<Value, GatewayError> {
        match method {
            "eth_chainId" => Ok(json!(hex_quantity(CHAIN_ID))),
            "net_version" => Ok(json!(CHAIN_ID.to_string())),
            "eth_blockNumber" => Ok(json!(hex_quantity(self.height()))),
            "eth_gasPrice" => Ok(json!(hex_quantity(GAS_PRICE))),
            "eth_getTransactionCount" => {
                let account = parse_address(str_param(method, &params, 0)?)
                    .map_err(|e| invalid_params(method, e.to_string()))?;
                Ok(json!(hex_quantity(self.nonce_of(account))))
            }
            "eth_getBalance" => {
                let account = parse_address(str_param(method, &params, 0)?)
                    .map_err(|e| invalid_params(method, e.to_string()))?;
                Ok(json!(Quantity::from(self.balance_of(account))))
            }
            "eth_getTransactionReceipt" => {
                let hash = parse_hash(str_param(method, &params, 0)?)
                    .map_err(|e| invalid_params(method, e.to_string()))?;
                match self.state.lock().receipts.get(&hash) {
                    Some(receipt) => {
                        serde_json::to_value(receipt).map_err(|e| GatewayError::decode(method, e))
                    }
                    None => Ok(Value::Null),
                }
            }
            "eth_getTransactionByBlockHashAndIndex" => {
                let block = parse_hash(str_param(method, &params, 0)?)
                    .map_err(|e| invalid_params(method, e.to_string()))?;
                let index = parse_hex_u64(str_param(method, &params, 1)?)
                    .map_err(|e| invalid_params(method, e.to_string()))?;
                let state = self.state.lock();
                let found = state
                    .executed
                    .iter()
                    .find(|action| index == 0 && block_hash(action.block_number) == block);
                match found {
                    Some(action) => {
                        let rpc = RpcTransaction {
                            block_hash: Some(block),
                            from: Some(action.from),
                            ..RpcTransaction::from(&action.transaction)
                        };
                        serde_json::to_value(rpc).map_err(|e| GatewayError::decode(method, e))
                    }
                    None => Ok(Value::Null),
                }
            }
            "eth_sendRawTransaction" => {
                let raw = decode_hex_bytes(str_param(method, &params, 0)?)
                    .map_err(|e| invalid_params(method, e.to_string()))?;
                self.execute(&raw)
                    .map(|hash| json!(hash))
                    .map_err(|message| GatewayError::Rpc {
                        method: method.to_string(),
                        code: REJECTED,
                        message,
                    })
            }
            other => Err(GatewayError::Rpc {
                method: other.to_string(),
                code: -32601,
                message: "the method does not exist/is not available".to_string(),
            }),
        }
    }
}
