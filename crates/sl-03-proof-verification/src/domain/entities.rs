//! # Proof Document
//!
//! Only the fields verification reads are modelled; everything else in the
//! ledger's proof JSON is ignored.

use serde::{Deserialize, Serialize};

/// Top-level proof response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofDocument {
    /// Proof graph
    pub proof: Proof,
    /// Credential records for the identities that sealed the proof
    #[serde(default)]
    pub signatories: Vec<Signatory>,
}

/// Proof graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    /// Nodes in ledger order
    #[serde(default)]
    pub nodes: Vec<ProofNode>,
}

/// One node of the proof graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofNode {
    /// Node identity
    pub id: NodeId,
    /// Signed payload; only meaningful on the Authorisation node
    #[serde(default)]
    pub payload: Option<String>,
    /// Outgoing links; the first one carries the seals
    #[serde(default)]
    pub links: Vec<ProofLink>,
}

/// Node identity; only the type is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeId {
    /// e.g. `Authorisation`
    #[serde(rename = "_type")]
    pub node_type: String,
}

/// Edge of the proof graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofLink {
    /// Seals over the source node's payload
    #[serde(default)]
    pub seals: Vec<ProofSeal>,
}

/// A seal as the ledger returns it.
///
/// `protocol_id` stays a string so an unknown protocol fails only its own
/// seal, not the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofSeal {
    /// Principal the seal was made for
    pub identity_id: String,
    /// Wire name of the signature protocol
    pub protocol_id: String,
    /// Base64url signature over the payload
    pub signature: String,
    /// Signing identity, when delegated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegate_identity_id: Option<String>,
}

impl ProofSeal {
    /// Identity whose key produced the signature.
    pub fn signer_id(&self) -> &str {
        self.delegate_identity_id
            .as_deref()
            .unwrap_or(&self.identity_id)
    }
}

/// Identity → credential record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatory {
    /// Identity id
    pub identity: String,
    /// Registered key material
    pub credentials: Credentials,
}

/// Key material registered for an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Base64url SPKI DER public key
    pub key: String,
    /// Registered protocol; overrides the seal's when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_id: Option<String>,
}

impl ProofDocument {
    /// Parse a proof response body.
    pub fn from_json(json: &str) -> Result<Self, crate::ProofError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Signatory record for `identity`, if any.
    pub fn signatory(&self, identity: &str) -> Option<&Signatory> {
        self.signatories.iter().find(|s| s.identity == identity)
    }
}
