//! # Exchange Telemetry
//!
//! Logging setup shared by every binary or test harness that drives the
//! exchange client. Library crates only emit `tracing` events; installing
//! the subscriber is left to whoever owns `main`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use exchange_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() {
//!     init_logging(&TelemetryConfig::from_env()).expect("logging");
//!     // client code here
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `EX_SERVICE_NAME` | `erb-exchange-client` | Service name attached to startup log |
//! | `EX_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `EX_JSON_LOGS` | `false` | Emit JSON lines instead of pretty output |
//! | `EX_CONSOLE_OUTPUT` | `true` | Write events to stdout at all |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter directive: {0}")]
    InvalidFilter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}
