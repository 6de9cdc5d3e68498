//! # Proof Verifier

use crate::domain::entities::{ProofDocument, ProofNode, ProofSeal};
use crate::domain::errors::ProofError;
use rayon::prelude::*;
use serde::Serialize;
use shared_crypto::{protocol, ProtocolId};

/// `id._type` of the node that carries the signed payload.
pub const AUTHORISATION_NODE_TYPE: &str = "Authorisation";

/// Result of checking one seal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "reason")]
pub enum SealOutcome {
    /// Signature verifies under the signatory's key
    Valid,
    /// Well-formed signature that does not verify
    Invalid,
    /// No signatory record for the signing identity
    UnknownSignatory,
    /// Key, signature or protocol could not be decoded
    Malformed(String),
}

/// Per-seal entry of a [`ProofReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatoryReport {
    /// Principal the seal was made for
    pub identity_id: String,
    /// Identity that actually signed, when delegated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate_identity_id: Option<String>,
    /// Protocol named by the seal
    pub protocol_id: String,
    /// Key the seal was checked against, if a signatory was found
    pub public_key: Option<String>,
    /// Base64url signature as carried by the seal
    pub signature: String,
    /// Mirrors `outcome == Valid`
    pub valid: bool,
    /// Detailed result
    pub outcome: SealOutcome,
}

impl SignatoryReport {
    /// True when the seal verified.
    pub fn is_valid(&self) -> bool {
        self.outcome == SealOutcome::Valid
    }
}

/// Outcome of verifying a whole proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofReport {
    /// String the seals were checked against
    pub payload: String,
    /// One entry per seal, in seal order
    pub signatories: Vec<SignatoryReport>,
}

impl ProofReport {
    /// True when there is at least one seal and every seal is valid.
    pub fn all_valid(&self) -> bool {
        !self.signatories.is_empty() && self.signatories.iter().all(SignatoryReport::is_valid)
    }

    /// Number of seals that verified.
    pub fn valid_count(&self) -> usize {
        self.signatories.iter().filter(|s| s.is_valid()).count()
    }
}

/// Parse and verify a proof in one step.
pub fn verify_proof_json(json: &str) -> Result<ProofReport, ProofError> {
    verify_proof(&ProofDocument::from_json(json)?)
}

/// Verify every seal of the proof's Authorisation node.
///
/// Seals are checked in parallel; the report keeps seal order.
pub fn verify_proof(document: &ProofDocument) -> Result<ProofReport, ProofError> {
    let node = authorisation_node(document)?;
    let payload = node.payload.as_deref().ok_or(ProofError::MissingPayload)?;
    let link = node.links.first().ok_or(ProofError::MissingSeals)?;

    let signatories: Vec<SignatoryReport> = link
        .seals
        .par_iter()
        .map(|seal| check_seal(document, payload, seal))
        .collect();

    for report in signatories.iter().filter(|r| !r.is_valid()) {
        tracing::warn!(
            identity_id = %report.identity_id,
            outcome = ?report.outcome,
            "Proof seal did not verify"
        );
    }

    let report = ProofReport {
        payload: payload.to_string(),
        signatories,
    };

    tracing::debug!(
        seals = report.signatories.len(),
        valid = report.valid_count(),
        "Verified proof"
    );

    Ok(report)
}

fn authorisation_node(document: &ProofDocument) -> Result<&ProofNode, ProofError> {
    let mut nodes = document
        .proof
        .nodes
        .iter()
        .filter(|node| node.id.node_type == AUTHORISATION_NODE_TYPE);

    match (nodes.next(), nodes.count()) {
        (None, _) => Err(ProofError::MissingAuthorisationNode),
        (Some(node), 0) => Ok(node),
        (Some(_), rest) => Err(ProofError::AmbiguousAuthorisationNode(rest + 1)),
    }
}

fn check_seal(document: &ProofDocument, payload: &str, seal: &ProofSeal) -> SignatoryReport {
    // Delegate's record first, then the principal's.
    let signatory = document
        .signatory(seal.signer_id())
        .or_else(|| document.signatory(&seal.identity_id));

    let outcome = match signatory {
        None => SealOutcome::UnknownSignatory,
        Some(signatory) => {
            // The signatory's registered protocol wins over the one the seal claims.
            let protocol_name = signatory
                .credentials
                .protocol_id
                .as_deref()
                .unwrap_or(&seal.protocol_id);
            verify_seal(protocol_name, &signatory.credentials.key, payload, seal)
        }
    };

    SignatoryReport {
        identity_id: seal.identity_id.clone(),
        delegate_identity_id: seal.delegate_identity_id.clone(),
        protocol_id: seal.protocol_id.clone(),
        public_key: signatory.map(|s| s.credentials.key.clone()),
        signature: seal.signature.clone(),
        valid: outcome == SealOutcome::Valid,
        outcome,
    }
}

fn verify_seal(protocol_name: &str, public_key: &str, payload: &str, seal: &ProofSeal) -> SealOutcome {
    let protocol_id = match protocol_name.parse::<ProtocolId>() {
        Ok(id) => id,
        Err(e) => return SealOutcome::Malformed(e.to_string()),
    };

    match protocol::verify(protocol_id, public_key, payload, &seal.signature) {
        Ok(true) => SealOutcome::Valid,
        Ok(false) => SealOutcome::Invalid,
        Err(e) => SealOutcome::Malformed(e.to_string()),
    }
}
