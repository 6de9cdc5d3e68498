//! # RSA Signatures (2048-bit, PKCS#1 v1.5, SHA-256)
//!
//! Same key transport as the ECDSA scheme: PKCS#8 DER private keys and
//! SubjectPublicKeyInfo DER public keys. PKCS#1 v1.5 signing is
//! deterministic, so the same key and message always give the same bytes.

use crate::protocol::SignatureScheme;
use crate::CryptoError;
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use zeroize::Zeroizing;

/// Modulus size used for newly generated keys.
pub const RSA_KEY_BITS: usize = 2048;

/// `SHA256WithRSA`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RsaPkcs1v15;

impl SignatureScheme for RsaPkcs1v15 {
    fn generate(&self) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>), CryptoError> {
        let private_key = RsaPrivateKey::new(&mut rand::thread_rng(), RSA_KEY_BITS)
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;
        let public_key = RsaPublicKey::from(&private_key);

        let public_der = public_key
            .to_public_key_der()
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;
        let private_der = private_key
            .to_pkcs8_der()
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;

        Ok((
            public_der.as_bytes().to_vec(),
            Zeroizing::new(private_der.as_bytes().to_vec()),
        ))
    }

    fn sign(&self, private_der: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let private_key = RsaPrivateKey::from_pkcs8_der(private_der)
            .map_err(|e| CryptoError::InvalidKeyMaterial(e.to_string()))?;
        let signing_key = SigningKey::<Sha256>::new(private_key);

        let signature = signing_key
            .try_sign(message)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        Ok(signature.to_vec())
    }

    fn verify(
        &self,
        public_der: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        let public_key = RsaPublicKey::from_public_key_der(public_der)
            .map_err(|e| CryptoError::InvalidKeyMaterial(e.to_string()))?;

        // A PKCS#1 v1.5 signature is exactly one modulus wide.
        if signature.len() != public_key.size() {
            return Err(CryptoError::InvalidSignatureEncoding);
        }
        let signature =
            Signature::try_from(signature).map_err(|_| CryptoError::InvalidSignatureEncoding)?;

        let verifying_key = VerifyingKey::<Sha256>::new(public_key);
        Ok(verifying_key.verify(message, &signature).is_ok())
    }
}
