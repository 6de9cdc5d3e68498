//! # SHA-2 Hashing
//!
//! Digests are returned as base64url text. SHA-256 is the only digest the
//! rest of the workspace relies on (claim identifiers); the wider enum keeps
//! the call signature stable if another digest is needed.

use crate::codec::encode_base64url;
use crate::CryptoError;
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fmt;
use std::str::FromStr;

/// Supported digest algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-256 (32 bytes)
    #[default]
    Sha256,
    /// SHA-384 (48 bytes)
    Sha384,
    /// SHA-512 (64 bytes)
    Sha512,
}

impl HashAlgorithm {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Raw digest bytes.
    pub fn digest(&self, message: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => Sha256::digest(message).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(message).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(message).to_vec(),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(CryptoError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Hash a UTF-8 message and return the base64url digest.
pub fn hash(algorithm: HashAlgorithm, message: &str) -> String {
    encode_base64url(algorithm.digest(message.as_bytes()))
}

/// SHA-256 of a UTF-8 message, base64url encoded.
pub fn sha256(message: &str) -> String {
    hash(HashAlgorithm::Sha256, message)
}
