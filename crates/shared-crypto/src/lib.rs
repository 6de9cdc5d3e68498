//! # Shared Crypto - Protocol Engine
//!
//! Signature protocols, digests and the base64url codec used by every
//! Sealed-Ledger crate.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `codec` | base64url (RFC 4648 §5), hex | Wire encoding of keys, signatures, digests |
//! | `hashing` | SHA-256 / SHA-384 / SHA-512 | Claim identifiers |
//! | `ecdsa` | secp256k1 + SHA-256 | `SHA256WithECDSA` |
//! | `rsa_pkcs1` | RSA-2048 PKCS#1 v1.5 + SHA-256 | `SHA256WithRSA` |
//! | `protocol` | dispatch over `ProtocolId` | generate / sign / verify |
//! | `keypair` | - | Caller-owned signing identity |
//!
//! ## Security Properties
//!
//! - Private keys are never logged (`KeyPair` redacts them in `Debug`)
//! - Secret key buffers are zeroized after use
//! - Verification mismatches are values (`Ok(false)`), not errors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod ecdsa;
pub mod errors;
pub mod hashing;
pub mod keypair;
pub mod protocol;
pub mod rsa_pkcs1;

// Re-exports
pub use codec::{decode_base64url, encode_base64url, from_hex, to_hex};
pub use ecdsa::EcdsaSecp256k1;
pub use errors::CryptoError;
pub use hashing::{hash, sha256, HashAlgorithm};
pub use keypair::KeyPair;
pub use protocol::{generate, sign, verify, ProtocolId, SignatureScheme};
pub use rsa_pkcs1::RsaPkcs1v15;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
