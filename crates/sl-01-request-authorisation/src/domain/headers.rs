//! # Header Bundles
//!
//! Encoded header values ready for a transport. Each value was produced
//! independently by [`shared_types::encode_header_value`].

use shared_types::{AUTHENTICATION_HEADER, AUTHORISATIONS_HEADER, CLAIMS_HEADER};

/// Headers of an authenticated read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadHeaders {
    /// Encoded authentication seal
    pub authentication: String,
    /// Request id embedded in the signed URI
    pub request_id: String,
}

impl ReadHeaders {
    /// `(header name, value)` pairs.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![(AUTHENTICATION_HEADER, self.authentication.clone())]
    }
}

/// Headers of an authenticated write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteHeaders {
    /// Encoded authentication seal
    pub authentication: String,
    /// Encoded ordered authorisation seals
    pub authorisations: String,
    /// Encoded claims mapping, for claim requests
    pub claims: Option<String>,
    /// Request id of the body
    pub request_id: String,
}

impl WriteHeaders {
    /// `(header name, value)` pairs; the claims header only when present.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            (AUTHENTICATION_HEADER, self.authentication.clone()),
            (AUTHORISATIONS_HEADER, self.authorisations.clone()),
        ];
        if let Some(claims) = &self.claims {
            pairs.push((CLAIMS_HEADER, claims.clone()));
        }
        pairs
    }
}
