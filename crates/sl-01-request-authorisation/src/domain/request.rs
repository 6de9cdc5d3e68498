//! # Request Assembler
//!
//! ## Reads
//!
//! A read is signed in one step: the authentication seal covers the
//! relative URI, query string included.
//!
//! ## Writes
//!
//! ```text
//! prepare ──► add_signature* ──► finalize
//! ```
//!
//! A [`DraftEnvelope`] is a value. Each step consumes it and returns the
//! next state, so a finalised draft cannot be signed again. The body is
//! serialised once, in `DraftEnvelope::new`, and every seal signs that
//! exact string.

use crate::domain::authorisation::{authentication_message, build_authorisation};
use crate::domain::envelope::{AuthenticationEnvelope, ReadEnvelope};
use crate::domain::errors::RequestError;
use serde::Serialize;
use serde_json::Value;
use shared_crypto::KeyPair;
use shared_types::Seal;
use uuid::Uuid;

/// Payload field carrying the request id.
pub const REQUEST_ID_FIELD: &str = "requestId";

/// A write request that is still collecting authorisations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftEnvelope {
    request_id: String,
    body: String,
    authorisations: Vec<Seal>,
}

impl DraftEnvelope {
    /// Serialise `payload` into an unsigned draft.
    ///
    /// Object keys come out sorted. A JSON object without `requestId` gets a
    /// fresh UUID v4; an existing string `requestId` is kept.
    pub fn new<P: Serialize + ?Sized>(payload: &P) -> Result<Self, RequestError> {
        let mut value = serde_json::to_value(payload)?;

        let request_id = match value.as_object_mut() {
            Some(object) => match object.get(REQUEST_ID_FIELD) {
                Some(Value::String(id)) => id.clone(),
                Some(other) => {
                    return Err(RequestError::InvalidPayload(format!(
                        "{REQUEST_ID_FIELD} must be a string, got {other}"
                    )))
                }
                None => {
                    let id = Uuid::new_v4().to_string();
                    object.insert(REQUEST_ID_FIELD.to_string(), Value::String(id.clone()));
                    id
                }
            },
            None => Uuid::new_v4().to_string(),
        };

        Ok(Self {
            request_id,
            body: serde_json::to_string(&value)?,
            authorisations: Vec::new(),
        })
    }

    /// Draft over an already serialised body, taken verbatim.
    pub fn from_body(body: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            body: body.into(),
            authorisations: Vec::new(),
        }
    }

    /// Id carried in the payload and every seal.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// The string every authorisation signs.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Authorisations collected so far, in signing order.
    pub fn authorisations(&self) -> &[Seal] {
        &self.authorisations
    }

    /// True once the first authorisation is present.
    pub fn is_prepared(&self) -> bool {
        !self.authorisations.is_empty()
    }

    /// Add the first authorisation.
    pub fn prepare(
        mut self,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<Self, RequestError> {
        if self.is_prepared() {
            return Err(RequestError::AlreadyPrepared);
        }
        let seal = build_authorisation(key_pair, &self.body, delegator_identity_id)?;
        self.authorisations.push(seal);
        Ok(self)
    }

    /// Append a further authorisation. Order is preserved.
    pub fn add_signature(
        mut self,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<Self, RequestError> {
        if !self.is_prepared() {
            return Err(RequestError::NotPrepared);
        }
        let seal = build_authorisation(key_pair, &self.body, delegator_identity_id)?;
        self.authorisations.push(seal);
        Ok(self)
    }

    /// Seal the authorisations and produce the envelope.
    pub fn finalize(
        self,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<AuthenticationEnvelope, RequestError> {
        if !self.is_prepared() {
            return Err(RequestError::NotPrepared);
        }

        let message = authentication_message(&self.authorisations);
        let authentication = build_authorisation(key_pair, &message, delegator_identity_id)?;

        tracing::debug!(
            request_id = %self.request_id,
            authorisations = self.authorisations.len(),
            authenticator = %authentication.identity_id,
            "Finalised write request"
        );

        Ok(AuthenticationEnvelope {
            request_id: self.request_id,
            body: self.body,
            authentication,
            authorisations: self.authorisations,
            claims: None,
        })
    }
}

/// Serialise `payload` and add the first authorisation.
pub fn prepare<P: Serialize + ?Sized>(
    payload: &P,
    key_pair: &KeyPair,
    delegator_identity_id: Option<&str>,
) -> Result<DraftEnvelope, RequestError> {
    DraftEnvelope::new(payload)?.prepare(key_pair, delegator_identity_id)
}

/// See [`DraftEnvelope::add_signature`].
pub fn add_signature(
    draft: DraftEnvelope,
    key_pair: &KeyPair,
    delegator_identity_id: Option<&str>,
) -> Result<DraftEnvelope, RequestError> {
    draft.add_signature(key_pair, delegator_identity_id)
}

/// See [`DraftEnvelope::finalize`].
pub fn finalize(
    draft: DraftEnvelope,
    key_pair: &KeyPair,
    delegator_identity_id: Option<&str>,
) -> Result<AuthenticationEnvelope, RequestError> {
    draft.finalize(key_pair, delegator_identity_id)
}

/// An authenticated read against one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    path: String,
    request_id: String,
    node_id: String,
}

impl ReadRequest {
    /// Read of `path` served by `node_id`, with a fresh request id.
    pub fn new(path: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            request_id: Uuid::new_v4().to_string(),
            node_id: node_id.into(),
        }
    }

    /// Replace the generated request id.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Id carried in the query string.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// `path?requestId=..&nodeId=..`; joins with `&` when `path` already
    /// has a query. Both values are percent-encoded.
    pub fn relative_uri(&self) -> String {
        let separator = if self.path.contains('?') { '&' } else { '?' };
        format!(
            "{}{}requestId={}&nodeId={}",
            self.path,
            separator,
            urlencoding::encode(&self.request_id),
            urlencoding::encode(&self.node_id)
        )
    }

    /// Sign the relative URI.
    pub fn authenticate(
        &self,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<ReadEnvelope, RequestError> {
        let relative_uri = self.relative_uri();
        let authentication = build_authorisation(key_pair, &relative_uri, delegator_identity_id)?;

        tracing::debug!(
            request_id = %self.request_id,
            authenticator = %authentication.identity_id,
            "Authenticated read request"
        );

        Ok(ReadEnvelope {
            request_id: self.request_id.clone(),
            relative_uri,
            authentication,
        })
    }
}
