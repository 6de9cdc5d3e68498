//! # Header Encoding
//!
//! Each header value is `base64url(JSON(value))`, computed independently.

use crate::entities::Seal;
use crate::errors::HeaderError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_crypto::codec::{decode_base64url, encode_base64url};

/// Header carrying the single authentication seal.
pub const AUTHENTICATION_HEADER: &str = "X-IOV42-Authentication";

/// Header carrying the ordered authorisation seals (write requests only).
pub const AUTHORISATIONS_HEADER: &str = "X-IOV42-Authorisations";

/// Header carrying the digest → claim mapping (claim requests only).
pub const CLAIMS_HEADER: &str = "X-IOV42-Claims";

/// Serialise to JSON and base64url-encode.
pub fn encode_header_value<T: Serialize + ?Sized>(value: &T) -> Result<String, HeaderError> {
    let json = serde_json::to_string(value).map_err(|e| HeaderError::Json(e.to_string()))?;
    Ok(encode_base64url(json))
}

/// Reverse of [`encode_header_value`].
pub fn decode_header_value<T: DeserializeOwned>(value: &str) -> Result<T, HeaderError> {
    let bytes = decode_base64url(value)?;
    serde_json::from_slice(&bytes).map_err(|e| HeaderError::Json(e.to_string()))
}

impl Seal {
    /// Encode as an authentication header value.
    pub fn to_header_value(&self) -> Result<String, HeaderError> {
        encode_header_value(self)
    }

    /// Decode an authentication header value.
    pub fn from_header_value(value: &str) -> Result<Self, HeaderError> {
        decode_header_value(value)
    }
}
