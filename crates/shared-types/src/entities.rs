//! # Domain Entities
//!
//! Core data structures carried in authentication headers.

use serde::{Deserialize, Serialize};
use shared_crypto::ProtocolId;
use std::collections::BTreeMap;

/// Identifier of a ledger principal.
pub type IdentityId = String;

/// Base64url SHA-256 digest of a claim; the claim's on-ledger key.
pub type ClaimDigest = String;

/// Claims header content: digest → claim text.
pub type ClaimsHeader = BTreeMap<ClaimDigest, String>;

/// Endorsements: digest → endorser signature.
pub type Endorsements = BTreeMap<ClaimDigest, String>;

/// One principal's signature over a payload.
///
/// `identity_id` is the principal the signature counts for. When
/// `delegate_identity_id` is set, that identity holds the key and produced
/// the signature on `identity_id`'s behalf; the two never coincide.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seal {
    /// Principal on whose behalf the signature counts
    pub identity_id: IdentityId,
    /// Protocol that produced `signature`
    pub protocol_id: ProtocolId,
    /// Base64url signature
    pub signature: String,
    /// Identity that actually signed, when acting as a delegate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegate_identity_id: Option<IdentityId>,
}

impl Seal {
    /// Identity whose public key verifies `signature`.
    pub fn signer_id(&self) -> &str {
        self.delegate_identity_id
            .as_deref()
            .unwrap_or(&self.identity_id)
    }

    /// True when signed by a delegate.
    pub fn is_delegated(&self) -> bool {
        self.delegate_identity_id.is_some()
    }
}
