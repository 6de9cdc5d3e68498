//! # ECDSA Signatures (secp256k1, SHA-256)
//!
//! Keys travel as DER: PKCS#8 for the private key, SubjectPublicKeyInfo for
//! the public key. Signatures are ASN.1 DER `(r, s)` sequences, which is what
//! other ledger clients emit for `SHA256withECDSA`.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces on our side; other signers may use random
//!   nonces, so callers must not rely on signature equality
//! - High-S signatures from foreign signers are normalised before verification
//! - Secret key bytes are zeroized after export

use crate::protocol::SignatureScheme;
use crate::CryptoError;
use k256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};
use k256::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use zeroize::Zeroizing;

/// `SHA256WithECDSA` over secp256k1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EcdsaSecp256k1;

impl SignatureScheme for EcdsaSecp256k1 {
    fn generate(&self) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>), CryptoError> {
        let signing_key = SigningKey::random(&mut rand::thread_rng());

        let public_der = signing_key
            .verifying_key()
            .to_public_key_der()
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;
        let private_der = signing_key
            .to_pkcs8_der()
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;

        Ok((
            public_der.as_bytes().to_vec(),
            Zeroizing::new(private_der.as_bytes().to_vec()),
        ))
    }

    fn sign(&self, private_der: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let signing_key = SigningKey::from_pkcs8_der(private_der)
            .map_err(|e| CryptoError::InvalidKeyMaterial(e.to_string()))?;

        let signature: Signature = signing_key
            .try_sign(message)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        Ok(signature.to_der().as_bytes().to_vec())
    }

    fn verify(
        &self,
        public_der: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        let verifying_key = VerifyingKey::from_public_key_der(public_der)
            .map_err(|e| CryptoError::InvalidKeyMaterial(e.to_string()))?;

        let signature =
            Signature::from_der(signature).map_err(|_| CryptoError::InvalidSignatureEncoding)?;
        let signature = signature.normalize_s().unwrap_or(signature);

        Ok(verifying_key.verify(message, &signature).is_ok())
    }
}
