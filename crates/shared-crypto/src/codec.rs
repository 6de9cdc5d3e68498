//! # Base64url / Hex Codec
//!
//! Every binary value that crosses the protocol boundary (keys, signatures,
//! digests) is carried as RFC 4648 §5 base64url text without padding.
//!
//! Decoding is lenient about trailing `=` but strict about length: after the
//! padding is stripped, a length remainder of 1 (mod 4) can never be produced
//! by an encoder and is rejected as `MalformedEncoding`.

use crate::CryptoError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Encode bytes as unpadded base64url.
pub fn encode_base64url(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode base64url text, restoring canonical padding first.
pub fn decode_base64url(input: &str) -> Result<Vec<u8>, CryptoError> {
    let trimmed = input.split('=').next().unwrap_or_default();

    // Remainder 1 cannot be produced by any encoder.
    if trimmed.len() % 4 == 1 {
        return Err(CryptoError::MalformedEncoding(format!(
            "base64url length {} has an impossible remainder",
            trimmed.len()
        )));
    }

    URL_SAFE_NO_PAD
        .decode(trimmed)
        .map_err(|e| CryptoError::MalformedEncoding(e.to_string()))
}

/// Lowercase hex encoding.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Decode hex text into bytes.
pub fn from_hex(input: &str) -> Result<Vec<u8>, CryptoError> {
    hex::decode(input).map_err(|e| CryptoError::MalformedEncoding(e.to_string()))
}

/// Short hex fingerprint of a base64url key, suitable for logs.
///
/// Undecodable input yields `"invalid"` rather than an error.
pub fn fingerprint(key_base64url: &str) -> String {
    use sha2::{Digest, Sha256};

    match decode_base64url(key_base64url) {
        Ok(bytes) => to_hex(&Sha256::digest(bytes)[..8]),
        Err(_) => "invalid".to_string(),
    }
}
