//! # Request Errors
//!
//! Error types for building and submitting authenticated requests.

use crate::domain::config::ConfigError;
use shared_crypto::CryptoError;
use shared_types::HeaderError;
use thiserror::Error;

/// Errors that can occur while assembling or submitting a request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    /// `prepare` called on a draft that already holds authorisations
    #[error("Request is already prepared")]
    AlreadyPrepared,

    /// `add_signature` or `finalize` called before `prepare`
    #[error("Request has not been prepared")]
    NotPrepared,

    /// The payload could not be serialised to JSON
    #[error("Payload serialisation failed: {0}")]
    Serialization(String),

    /// The payload carries a `requestId` that is not a string
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Signing failed or key material was rejected
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// A header value could not be encoded
    #[error(transparent)]
    Header(#[from] HeaderError),

    /// Client configuration is unusable for this request
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The transport failed to deliver the request
    #[error("Transport failed: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Serialization(err.to_string())
    }
}
