//! Client configuration with validation.
//!
//! There is no built-in node endpoint: a client is always constructed from
//! an explicit configuration, loaded from TOML, the environment or code.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;

/// Exchange client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Node JSON-RPC URL
    pub endpoint: String,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Chain id override; queried with `eth_chainId` when unset
    pub chain_id: Option<u64>,
    /// Gas limit for every submitted transaction
    pub gas_limit: u64,
    /// Blocks added to the current height for signed deadlines
    pub deadline_offset: u64,
    /// `version` field written into exchange payloads
    pub payload_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            request_timeout_ms: 30_000,
            chain_id: None,
            gas_limit: 500_000,
            deadline_offset: 10,
            payload_version: ex_01_authorization::PAYLOAD_VERSION.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at `endpoint`.
    pub fn for_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Parse TOML; missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables.
    ///
    /// - `EX_RPC_ENDPOINT`: node URL (required)
    /// - `EX_RPC_TIMEOUT_MS`: request timeout (default: 30000)
    /// - `EX_CHAIN_ID`: chain id override (default: ask the node)
    /// - `EX_GAS_LIMIT`: gas limit (default: 500000)
    /// - `EX_DEADLINE_OFFSET`: deadline offset in blocks (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            endpoint: lookup("EX_RPC_ENDPOINT").unwrap_or_default(),
            request_timeout_ms: parse_var(&lookup, "EX_RPC_TIMEOUT_MS")?
                .unwrap_or(defaults.request_timeout_ms),
            chain_id: parse_var(&lookup, "EX_CHAIN_ID")?,
            gas_limit: parse_var(&lookup, "EX_GAS_LIMIT")?.unwrap_or(defaults.gas_limit),
            deadline_offset: parse_var(&lookup, "EX_DEADLINE_OFFSET")?
                .unwrap_or(defaults.deadline_offset),
            payload_version: defaults.payload_version,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "request_timeout_ms cannot be 0".into(),
            ));
        }
        // Intrinsic cost of any transaction
        if self.gas_limit < 21_000 {
            return Err(ConfigError::InvalidValue(format!(
                "gas_limit {} is below 21000",
                self.gas_limit
            )));
        }
        if self.deadline_offset == 0 {
            return Err(ConfigError::InvalidValue(
                "deadline_offset cannot be 0".into(),
            ));
        }
        if self.chain_id == Some(0) {
            return Err(ConfigError::InvalidValue("chain_id cannot be 0".into()));
        }
        if self.payload_version.is_empty() {
            return Err(ConfigError::InvalidValue(
                "payload_version cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(format!("{}={:?} is not a number", key, raw))),
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No node endpoint configured")]
    MissingEndpoint,
    #[error("Endpoint must be an http(s) URL: {0}")]
    InvalidEndpoint(String),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    #[error("Cannot parse configuration: {0}")]
    Parse(String),
}
