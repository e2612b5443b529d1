//! `jsonrpsee` HTTP adapter.
//!
//! Node error objects become [`GatewayError::Rpc`]; every other client
//! failure (connection refused, HTTP status, timeout, malformed response)
//! becomes [`GatewayError::Transport`]. No retries.

use crate::domain::errors::GatewayError;
use crate::ports::outbound::RpcGateway;
use async_trait::async_trait;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ArrayParams;
use jsonrpsee::core::ClientError;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Gateway over HTTP JSON-RPC. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct JsonRpcGateway {
    client: HttpClient,
    endpoint: String,
}

impl JsonRpcGateway {
    /// Build a client for `endpoint`. No request is made until the first call.
    pub fn new(endpoint: &str, request_timeout: Duration) -> Result<Self, GatewayError> {
        let client = HttpClientBuilder::default()
            .request_timeout(request_timeout)
            .build(endpoint)
            .map_err(|e| GatewayError::Transport {
                method: "connect".to_string(),
                reason: e.to_string(),
            })?;

        debug!(endpoint, ?request_timeout, "JSON-RPC gateway created");

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RpcGateway for JsonRpcGateway {
    #[instrument(skip(self, params), fields(endpoint = %self.endpoint))]
    async fn invoke(&self, method: &str, params: Vec<Value>) -> Result<Value, GatewayError> {
        let mut array = ArrayParams::new();
        for param in params {
            array
                .insert(param)
                .map_err(|e| GatewayError::decode(method, e))?;
        }

        let result = self
            .client
            .request::<Value, _>(method, array)
            .await
            .map_err(|e| map_client_error(method, e));

        match &result {
            Ok(_) => debug!("RPC call succeeded"),
            Err(e) => warn!(error = %e, "RPC call failed"),
        }
        result
    }
}

fn map_client_error(method: &str, err: ClientError) -> GatewayError {
    match err {
        ClientError::Call(object) => GatewayError::Rpc {
            method: method.to_string(),
            code: object.code(),
            message: object.message().to_string(),
        },
        other => GatewayError::Transport {
            method: method.to_string(),
            reason: other.to_string(),
        },
    }
}
