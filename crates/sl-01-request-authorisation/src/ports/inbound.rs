//! # Inbound Ports (Driving Ports / API)
//!
//! The synchronous signing API of this subsystem. Everything here is pure;
//! submission lives on the service.

use crate::domain::envelope::{AuthenticationEnvelope, ReadEnvelope};
use crate::domain::errors::RequestError;
use crate::domain::request::DraftEnvelope;
use serde_json::Value;
use shared_crypto::KeyPair;
use shared_types::Seal;

/// Primary Request Authorisation API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait RequestAuthorisationApi: Send + Sync {
    /// Sign `payload`, optionally on behalf of a delegator.
    fn build_authorisation(
        &self,
        key_pair: &KeyPair,
        payload: &str,
        delegator_identity_id: Option<&str>,
    ) -> Result<Seal, RequestError>;

    /// Serialise a payload and add its first authorisation.
    ///
    /// # Errors
    /// * `RequestError::InvalidPayload` - `requestId` present but not a string
    fn prepare(
        &self,
        payload: &Value,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<DraftEnvelope, RequestError>;

    /// Append one authorisation to a prepared draft.
    ///
    /// # Errors
    /// * `RequestError::NotPrepared` - draft holds no authorisation yet
    fn add_signature(
        &self,
        draft: DraftEnvelope,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<DraftEnvelope, RequestError>;

    /// Produce the authentication seal and the final envelope.
    ///
    /// # Errors
    /// * `RequestError::NotPrepared` - draft holds no authorisation yet
    fn finalize(
        &self,
        draft: DraftEnvelope,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<AuthenticationEnvelope, RequestError>;

    /// Authenticate a read of `resource` (e.g. `identities/alice`) against
    /// the configured node.
    ///
    /// # Errors
    /// * `RequestError::Config` - no node id is known
    fn authenticate_read(
        &self,
        resource: &str,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<ReadEnvelope, RequestError>;
}
