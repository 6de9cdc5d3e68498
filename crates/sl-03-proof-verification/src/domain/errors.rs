//! # Proof Errors
//!
//! Structural faults in a proof document. Signature failures are not
//! errors; see `SealOutcome`.

use thiserror::Error;

/// Errors that prevent a proof from being checked at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProofError {
    /// The document is not valid proof JSON
    #[error("Invalid proof document: {0}")]
    Parse(String),

    /// No node of type `Authorisation`
    #[error("Proof has no Authorisation node")]
    MissingAuthorisationNode,

    /// More than one node of type `Authorisation`
    #[error("Proof has {0} Authorisation nodes, expected one")]
    AmbiguousAuthorisationNode(usize),

    /// The Authorisation node carries no payload
    #[error("Authorisation node has no payload")]
    MissingPayload,

    /// The Authorisation node has no link to take seals from
    #[error("Authorisation node has no links")]
    MissingSeals,
}

impl From<serde_json::Error> for ProofError {
    fn from(err: serde_json::Error) -> Self {
        ProofError::Parse(err.to_string())
    }
}
