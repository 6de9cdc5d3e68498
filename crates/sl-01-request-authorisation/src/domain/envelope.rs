//! # Finalised Envelopes
//!
//! The terminal products of the request assembler. Both are plain values;
//! nothing here signs anything.

use crate::domain::authorisation::authentication_message;
use crate::domain::errors::RequestError;
use crate::domain::headers::{ReadHeaders, WriteHeaders};
use shared_types::{encode_header_value, ClaimsHeader, Seal};

/// A finalised write: body, ordered authorisations and the authentication
/// seal over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationEnvelope {
    pub(crate) request_id: String,
    pub(crate) body: String,
    pub(crate) authentication: Seal,
    pub(crate) authorisations: Vec<Seal>,
    pub(crate) claims: Option<ClaimsHeader>,
}

impl AuthenticationEnvelope {
    /// Request id shared by the body and every seal.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Serialised request body; exactly the string every authorisation signed.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Seal over the authentication message.
    pub fn authentication(&self) -> &Seal {
        &self.authentication
    }

    /// Authorisations in signing order.
    pub fn authorisations(&self) -> &[Seal] {
        &self.authorisations
    }

    /// Attached claims, if any.
    pub fn claims(&self) -> Option<&ClaimsHeader> {
        self.claims.as_ref()
    }

    /// Attach a claims mapping. Claims are not covered by any seal.
    pub fn with_claims(mut self, claims: ClaimsHeader) -> Self {
        self.claims = Some(claims);
        self
    }

    /// Message the authentication seal signed.
    pub fn authentication_message(&self) -> String {
        authentication_message(&self.authorisations)
    }

    /// Encode every header value.
    pub fn headers(&self) -> Result<WriteHeaders, RequestError> {
        let claims = self
            .claims
            .as_ref()
            .map(encode_header_value)
            .transpose()?;

        Ok(WriteHeaders {
            authentication: encode_header_value(&self.authentication)?,
            authorisations: encode_header_value(&self.authorisations)?,
            claims,
            request_id: self.request_id.clone(),
        })
    }
}

/// A finalised read: the signed URI and its authentication seal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadEnvelope {
    pub(crate) request_id: String,
    pub(crate) relative_uri: String,
    pub(crate) authentication: Seal,
}

impl ReadEnvelope {
    /// Request id shared by the body and every seal.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// URI the authentication seal signed; send it unchanged.
    pub fn relative_uri(&self) -> &str {
        &self.relative_uri
    }

    /// Seal over the authentication message.
    pub fn authentication(&self) -> &Seal {
        &self.authentication
    }

    /// Encode the read headers.
    pub fn headers(&self) -> Result<ReadHeaders, RequestError> {
        Ok(ReadHeaders {
            authentication: encode_header_value(&self.authentication)?,
            request_id: self.request_id.clone(),
        })
    }
}
