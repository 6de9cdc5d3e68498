//! Claim hashing.

use shared_crypto::sha256;
use shared_types::{ClaimDigest, ClaimsHeader};

/// Base64url SHA-256 of one claim.
pub fn claim_digest(claim: &str) -> ClaimDigest {
    sha256(claim)
}

/// Digest every claim, preserving order. Duplicates are kept.
pub fn digest_claims<S: AsRef<str>>(claims: &[S]) -> Vec<ClaimDigest> {
    claims.iter().map(|claim| claim_digest(claim.as_ref())).collect()
}

/// Digest → claim mapping for the claims header.
pub fn claims_header<S: AsRef<str>>(claims: &[S]) -> ClaimsHeader {
    claims
        .iter()
        .map(|claim| (claim_digest(claim.as_ref()), claim.as_ref().to_string()))
        .collect()
}
