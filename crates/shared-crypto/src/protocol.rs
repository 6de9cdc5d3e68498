//! # Protocol Engine
//!
//! `ProtocolId` is a closed set. Each variant maps to exactly one
//! `SignatureScheme` implementation, so adding or removing a protocol is an
//! exhaustiveness change the compiler walks you through.
//!
//! The engine speaks base64url at its boundary and raw DER bytes to the
//! schemes underneath.

use crate::codec::{decode_base64url, encode_base64url};
use crate::ecdsa::EcdsaSecp256k1;
use crate::keypair::KeyPair;
use crate::rsa_pkcs1::RsaPkcs1v15;
use crate::CryptoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

/// One signature scheme: key generation, signing and verification over raw bytes.
pub trait SignatureScheme: Send + Sync {
    /// Generate a key pair as `(public SPKI DER, private PKCS#8 DER)`.
    fn generate(&self) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>), CryptoError>;

    /// Sign `message` with a PKCS#8 DER private key.
    fn sign(&self, private_der: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Verify `signature` over `message`.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not match.
    fn verify(&self, public_der: &[u8], message: &[u8], signature: &[u8])
        -> Result<bool, CryptoError>;
}

/// Supported signature protocols, named as on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolId {
    /// ECDSA over secp256k1 with SHA-256
    #[serde(rename = "SHA256WithECDSA")]
    Sha256WithEcdsa,
    /// RSA-2048 PKCS#1 v1.5 with SHA-256
    #[serde(rename = "SHA256WithRSA")]
    Sha256WithRsa,
}

impl ProtocolId {
    /// Every supported protocol.
    pub const ALL: [ProtocolId; 2] = [ProtocolId::Sha256WithEcdsa, ProtocolId::Sha256WithRsa];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolId::Sha256WithEcdsa => "SHA256WithECDSA",
            ProtocolId::Sha256WithRsa => "SHA256WithRSA",
        }
    }

    /// Scheme implementation for this protocol.
    pub fn scheme(&self) -> &'static dyn SignatureScheme {
        match self {
            ProtocolId::Sha256WithEcdsa => &EcdsaSecp256k1,
            ProtocolId::Sha256WithRsa => &RsaPkcs1v15,
        }
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolId {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHA256WithECDSA" => Ok(ProtocolId::Sha256WithEcdsa),
            "SHA256WithRSA" => Ok(ProtocolId::Sha256WithRsa),
            other => Err(CryptoError::UnsupportedProtocol(other.to_string())),
        }
    }
}

/// Generate a key pair; a missing identity id becomes a random UUID v4.
pub fn generate(protocol_id: ProtocolId, identity_id: Option<&str>) -> Result<KeyPair, CryptoError> {
    let (public_der, private_der) = protocol_id.scheme().generate()?;

    let identity_id = identity_id
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let key_pair = KeyPair::from_parts(
        identity_id,
        protocol_id,
        encode_base64url(&public_der),
        encode_base64url(private_der.as_slice()),
    );

    tracing::debug!(
        identity_id = %key_pair.identity_id(),
        protocol_id = %protocol_id,
        fingerprint = %key_pair.fingerprint(),
        "Generated key pair"
    );

    Ok(key_pair)
}

/// Sign a UTF-8 message; returns the base64url signature.
pub fn sign(protocol_id: ProtocolId, private_key: &str, message: &str) -> Result<String, CryptoError> {
    let private_der = Zeroizing::new(decode_base64url(private_key)?);
    let signature = protocol_id.scheme().sign(&private_der, message.as_bytes())?;
    Ok(encode_base64url(signature))
}

/// Verify a base64url signature over a UTF-8 message.
///
/// A mismatch is `Ok(false)`. Errors are reserved for malformed inputs.
pub fn verify(
    protocol_id: ProtocolId,
    public_key: &str,
    message: &str,
    signature: &str,
) -> Result<bool, CryptoError> {
    let public_der = decode_base64url(public_key)?;
    let signature = decode_base64url(signature).map_err(|_| CryptoError::InvalidSignatureEncoding)?;
    protocol_id
        .scheme()
        .verify(&public_der, message.as_bytes(), &signature)
}
