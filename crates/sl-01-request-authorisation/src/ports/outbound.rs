//! # Outbound Ports (Driven Ports / SPI)
//!
//! The transport that carries finished envelopes to a ledger node. HTTP
//! clients, test doubles and recorders all plug in here.

use crate::domain::headers::{ReadHeaders, WriteHeaders};
use serde_json::Value;
use thiserror::Error;

/// Error from transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The node answered with a non-success status
    #[error("Node returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response was not valid JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Communication error
    #[error("Communication error: {0}")]
    CommunicationError(String),
}

/// Gateway to a ledger node.
#[async_trait::async_trait]
pub trait LedgerTransport: Send + Sync {
    /// Send a write.
    ///
    /// # Arguments
    /// * `path` - Absolute API path, e.g. `/api/v1/requests`
    /// * `body` - Serialised body; must be sent byte-for-byte
    /// * `headers` - Encoded authentication headers
    async fn put(&self, path: &str, body: &str, headers: &WriteHeaders)
        -> Result<Value, TransportError>;

    /// Send a read. `headers` is `None` for unauthenticated endpoints such
    /// as node info.
    async fn get(
        &self,
        relative_uri: &str,
        headers: Option<&ReadHeaders>,
    ) -> Result<Value, TransportError>;
}
