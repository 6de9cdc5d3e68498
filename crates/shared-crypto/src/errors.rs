//! Crypto error types.

use thiserror::Error;

/// Errors raised by the protocol engine and codec.
///
/// A signature that simply does not match is not an error; `verify`
/// returns `Ok(false)` for that case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Protocol identifier outside the supported set
    #[error("Unsupported protocol: {0}")]
    UnsupportedProtocol(String),

    /// Digest algorithm outside the supported set
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Key bytes could not be parsed for the stated protocol
    #[error("Invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Signature bytes are structurally malformed
    #[error("Invalid signature encoding")]
    InvalidSignatureEncoding,

    /// Base64url or hex input could not be decoded
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(String),

    /// Key generation failed
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// The signing primitive reported an error
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}
