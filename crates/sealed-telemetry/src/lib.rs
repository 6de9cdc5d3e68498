//! # Sealed Telemetry
//!
//! Logging setup shared by Sealed-Ledger binaries and test harnesses.
//! Library crates only emit `tracing` events; installing a subscriber is
//! left to whoever owns `main`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sealed_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SL_SERVICE_NAME` | `sealed-ledger` | Service name in log lines |
//! | `SL_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter directive |
//! | `SL_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `SL_JSON_LOGS` | `false` | JSON lines instead of text |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Subscriber could not be installed
    #[error("Failed to initialize logger: {0}")]
    LoggerInit(String),

    /// Configuration rejected
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging for the process.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_logging(config)
}
