//! Caller-owned key pair.

use crate::codec::fingerprint;
use crate::protocol::{self, ProtocolId};
use crate::CryptoError;
use std::fmt;
use zeroize::Zeroizing;

/// A signing identity: id, protocol and base64url DER keys.
///
/// Immutable once built. Not `Serialize`; `Debug` redacts the private key,
/// and the private key string is zeroized on drop.
#[derive(Clone)]
pub struct KeyPair {
    identity_id: String,
    protocol_id: ProtocolId,
    public_key: String,
    private_key: Zeroizing<String>,
}

impl KeyPair {
    /// Generate a fresh key pair. See [`protocol::generate`].
    pub fn generate(protocol_id: ProtocolId, identity_id: Option<&str>) -> Result<Self, CryptoError> {
        protocol::generate(protocol_id, identity_id)
    }

    /// Assemble a key pair from existing base64url keys.
    pub fn from_parts(
        identity_id: impl Into<String>,
        protocol_id: ProtocolId,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        Self {
            identity_id: identity_id.into(),
            protocol_id,
            public_key: public_key.into(),
            private_key: Zeroizing::new(private_key.into()),
        }
    }

    /// Identity this key pair signs as.
    pub fn identity_id(&self) -> &str {
        &self.identity_id
    }

    /// Protocol this key pair signs with.
    pub fn protocol_id(&self) -> ProtocolId {
        self.protocol_id
    }

    /// Base64url SubjectPublicKeyInfo DER.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Base64url PKCS#8 DER.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// Short hex fingerprint of the public key, for logs.
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.public_key)
    }

    /// Sign a message with this key pair.
    pub fn sign(&self, message: &str) -> Result<String, CryptoError> {
        protocol::sign(self.protocol_id, &self.private_key, message)
    }

    /// Verify a signature against this key pair's public key.
    pub fn verify(&self, message: &str, signature: &str) -> Result<bool, CryptoError> {
        protocol::verify(self.protocol_id, &self.public_key, message, signature)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("identity_id", &self.identity_id)
            .field("protocol_id", &self.protocol_id)
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}
