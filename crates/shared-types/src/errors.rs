//! # Error Types

use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors encoding or decoding a header value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// JSON (de)serialisation failed.
    #[error("Header JSON error: {0}")]
    Json(String),

    /// The base64url layer could not be decoded.
    #[error(transparent)]
    Encoding(#[from] CryptoError),
}
