//! # Authorisation Builder
//!
//! A seal is one principal's signature over a payload string. With
//! delegation, the seal names the principal (`identity_id`) while the key
//! belongs to the delegate (`delegate_identity_id`).

use shared_crypto::{CryptoError, KeyPair};
use shared_types::Seal;

/// Sign `payload` with `key_pair`, optionally on behalf of a delegator.
///
/// A delegator equal to the key pair's own identity is treated as no
/// delegation, so a seal never names the same identity twice.
pub fn build_authorisation(
    key_pair: &KeyPair,
    payload: &str,
    delegator_identity_id: Option<&str>,
) -> Result<Seal, CryptoError> {
    let signature = key_pair.sign(payload)?;

    let (identity_id, delegate_identity_id) = match delegator_identity_id {
        Some(delegator) if delegator != key_pair.identity_id() => (
            delegator.to_string(),
            Some(key_pair.identity_id().to_string()),
        ),
        _ => (key_pair.identity_id().to_string(), None),
    };

    tracing::trace!(
        identity_id = %identity_id,
        delegate = ?delegate_identity_id,
        protocol_id = %key_pair.protocol_id(),
        "Built authorisation"
    );

    Ok(Seal {
        identity_id,
        protocol_id: key_pair.protocol_id(),
        signature,
        delegate_identity_id,
    })
}

/// Message the authentication seal of a write request signs: the
/// authorisation signatures joined with `;`, in order.
pub fn authentication_message(authorisations: &[Seal]) -> String {
    authorisations
        .iter()
        .map(|seal| seal.signature.as_str())
        .collect::<Vec<_>>()
        .join(";")
}
