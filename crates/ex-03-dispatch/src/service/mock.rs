//! In-memory node for dispatch tests.

use crate::config::ClientConfig;
use crate::service::ExchangeClient;
use async_trait::async_trait;
use ex_01_authorization::{Wallet, WormholesPayload};
use ex_02_rpc_gateway::{GatewayError, RpcGateway, RpcTransaction, SignedTransaction};
use serde_json::{json, Value};
use shared_types::encoding::{decode_hex_bytes, hex_quantity, parse_hex_u64};
use std::sync::Mutex;

pub(crate) const CALLER_KEY: &str =
    "50fd980dab6b010c001fcab754421792b451c48706d5bb69ac0ad93ab8dd7aa1";
pub(crate) const CHAIN_ID: u64 = 51888;
pub(crate) const BLOCK_NUMBER: u64 = 0x670;

/// Answers the handful of methods the client uses and keeps every
/// submitted transaction, decoded.
pub(crate) struct MockGateway {
    block_number: u64,
    rejection: Option<(i32, String)>,
    nonce: Mutex<u64>,
    calls: Mutex<Vec<String>>,
    sent: Mutex<Vec<SignedTransaction>>,
}

impl MockGateway {
    pub(crate) fn new() -> Self {
        Self {
            block_number: BLOCK_NUMBER,
            rejection: None,
            nonce: Mutex::new(0),
            calls: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Reject every submission with a node error.
    pub(crate) fn rejecting(mut self, code: i32, message: &str) -> Self {
        self.rejection = Some((code, message.to_string()));
        self
    }

    pub(crate) fn config() -> ClientConfig {
        ClientConfig::for_endpoint("http://127.0.0.1:8545")
    }

    pub(crate) fn into_client(self) -> ExchangeClient<Self> {
        ExchangeClient::new(
            Wallet::from_private_key(CALLER_KEY).unwrap(),
            self,
            Self::config(),
        )
    }

    pub(crate) fn methods(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn sent(&self) -> Vec<SignedTransaction> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn last_sent(&self) -> SignedTransaction {
        self.sent.lock().unwrap().last().cloned().unwrap()
    }

    pub(crate) fn last_payload(&self) -> WormholesPayload {
        WormholesPayload::from_tx_data(&self.last_sent().tx.data).unwrap()
    }

    /// The last payload as generic JSON, for key-level assertions.
    pub(crate) fn last_payload_json(&self) -> Value {
        serde_json::to_value(self.last_payload()).unwrap()
    }
}

#[async_trait]
impl RpcGateway for MockGateway {
    async fn invoke(&self, method: &str, params: Vec<Value>) -> Result<Value, GatewayError> {
        self.calls.lock().unwrap().push(method.to_string());

        match method {
            "eth_chainId" => Ok(json!(hex_quantity(CHAIN_ID))),
            "eth_blockNumber" => Ok(json!(hex_quantity(self.block_number))),
            "eth_getTransactionCount" => Ok(json!(hex_quantity(*self.nonce.lock().unwrap()))),
            "eth_gasPrice" => Ok(json!("0x3b9aca00")),
            "eth_getBalance" => Ok(json!("0xde0b6b3a7640000")),
            "eth_getTransactionReceipt" => Ok(Value::Null),
            // Every submission lands in one block, in order
            "eth_getTransactionByBlockHashAndIndex" => {
                let index = parse_hex_u64(params[1].as_str().unwrap()).unwrap() as usize;
                match self.sent.lock().unwrap().get(index) {
                    Some(signed) => Ok(serde_json::to_value(RpcTransaction::from(signed)).unwrap()),
                    None => Ok(Value::Null),
                }
            }
            "eth_sendRawTransaction" => {
                if let Some((code, message)) = &self.rejection {
                    return Err(GatewayError::Rpc {
                        method: method.to_string(),
                        code: *code,
                        message: message.clone(),
                    });
                }
                let raw = decode_hex_bytes(params[0].as_str().unwrap()).unwrap();
                let signed = SignedTransaction::decode(&raw).unwrap();
                let hash = signed.hash();
                *self.nonce.lock().unwrap() += 1;
                self.sent.lock().unwrap().push(signed);
                Ok(json!(hash))
            }
            other => Err(GatewayError::Rpc {
                method: other.to_string(),
                code: -32601,
                message: "the method does not exist/is not available".to_string(),
            }),
        }
    }
}
