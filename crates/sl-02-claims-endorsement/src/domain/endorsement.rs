//! Endorsement signing and checking.

use crate::domain::claims::claim_digest;
use rayon::prelude::*;
use shared_crypto::{protocol, CryptoError, KeyPair, ProtocolId};
use shared_types::Endorsements;

/// Binding string an endorser signs for `claim` about `subject_id`.
pub fn endorsement_message(subject_id: &str, claim: &str, subject_type_id: Option<&str>) -> String {
    let digest = claim_digest(claim);
    match subject_type_id {
        Some(type_id) => format!("{subject_id};{type_id};{digest}"),
        None => format!("{subject_id};{digest}"),
    }
}

/// Endorse one claim.
pub fn endorsement_signature(
    subject_id: &str,
    claim: &str,
    key_pair: &KeyPair,
    subject_type_id: Option<&str>,
) -> Result<String, CryptoError> {
    key_pair.sign(&endorsement_message(subject_id, claim, subject_type_id))
}

/// Endorse a batch of claims; digest → signature.
///
/// Claims are signed in parallel. Duplicate claims collapse to one entry.
pub fn endorsements<S: AsRef<str> + Sync>(
    subject_id: &str,
    claims: &[S],
    key_pair: &KeyPair,
    subject_type_id: Option<&str>,
) -> Result<Endorsements, CryptoError> {
    let endorsements = claims
        .par_iter()
        .map(|claim| {
            let claim = claim.as_ref();
            let signature = endorsement_signature(subject_id, claim, key_pair, subject_type_id)?;
            Ok((claim_digest(claim), signature))
        })
        .collect::<Result<Endorsements, CryptoError>>()?;

    tracing::debug!(
        subject_id = %subject_id,
        endorser = %key_pair.identity_id(),
        claims = endorsements.len(),
        "Endorsed claims"
    );

    Ok(endorsements)
}

/// Check an endorsement by rebuilding its binding string.
pub fn verify_endorsement(
    subject_id: &str,
    claim: &str,
    protocol_id: ProtocolId,
    public_key: &str,
    signature: &str,
    subject_type_id: Option<&str>,
) -> Result<bool, CryptoError> {
    let message = endorsement_message(subject_id, claim, subject_type_id);
    protocol::verify(protocol_id, public_key, &message, signature)
}
