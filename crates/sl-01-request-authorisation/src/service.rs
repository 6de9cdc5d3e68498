//! # Authorisation Service
//!
//! Application service layer that implements the `RequestAuthorisationApi`
//! trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`RequestAuthorisationApi`)
//! - Uses the outbound port (`LedgerTransport`) to deliver envelopes
//! - Delegates signing to the domain layer

use crate::domain::authorisation;
use crate::domain::config::{ClientConfig, ConfigError};
use crate::domain::envelope::{AuthenticationEnvelope, ReadEnvelope};
use crate::domain::errors::RequestError;
use crate::domain::request::{self, DraftEnvelope, ReadRequest};
use crate::ports::inbound::RequestAuthorisationApi;
use crate::ports::outbound::LedgerTransport;
use serde_json::Value;
use sealed_telemetry::log_event;
use shared_crypto::KeyPair;
use shared_types::Seal;

/// Log component name for this subsystem.
const COMPONENT: &str = "sl-01";

/// Node-info resource, readable without authentication.
pub const NODE_INFO_RESOURCE: &str = "node-info";

/// Request Authorisation Service.
///
/// Signing goes through the domain layer; the transport is only touched by
/// the async `submit_*` and `connect` entry points.
pub struct AuthorisationService<T: LedgerTransport> {
    transport: T,
    config: ClientConfig,
}

impl<T: LedgerTransport> AuthorisationService<T> {
    /// Create a service from a validated configuration.
    pub fn new(transport: T, config: ClientConfig) -> Result<Self, RequestError> {
        config.validate()?;
        Ok(Self { transport, config })
    }

    /// Create a service, asking the node for its id when the configuration
    /// does not name one.
    pub async fn connect(transport: T, mut config: ClientConfig) -> Result<Self, RequestError> {
        config.validate()?;

        if config.node_id.is_none() {
            let path = config.api_path(NODE_INFO_RESOURCE);
            let info = transport
                .get(&path, None)
                .await
                .map_err(|e| RequestError::Transport(e.to_string()))?;

            let node_id = info
                .get("nodeId")
                .and_then(Value::as_str)
                .ok_or_else(|| RequestError::Transport("node info without nodeId".into()))?;

            log_event!(info, COMPONENT, "Discovered ledger node", node_id = %node_id);
            config.node_id = Some(node_id.to_string());
        }

        Ok(Self { transport, config })
    }

    /// Active client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying ledger transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Generate a key pair with the configured default protocol.
    pub fn generate_key_pair(&self, identity_id: Option<&str>) -> Result<KeyPair, RequestError> {
        Ok(KeyPair::generate(self.config.default_protocol, identity_id)?)
    }

    /// Deliver a finalised write to `resource`.
    pub async fn submit_write(
        &self,
        resource: &str,
        envelope: &AuthenticationEnvelope,
    ) -> Result<Value, RequestError> {
        let path = self.config.api_path(resource);
        let headers = envelope.headers()?;

        log_event!(
            info,
            COMPONENT,
            "Submitting write request",
            request_id = %envelope.request_id(),
            path = %path,
            authorisations = envelope.authorisations().len()
        );

        self.transport
            .put(&path, envelope.body(), &headers)
            .await
            .map_err(|e| {
                log_event!(warn, COMPONENT, "Write failed", request_id = %envelope.request_id(), error = %e);
                RequestError::Transport(e.to_string())
            })
    }

    /// Authenticate and deliver a read of `resource`.
    pub async fn submit_read(
        &self,
        resource: &str,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<Value, RequestError> {
        let envelope = self.authenticate_read(resource, key_pair, delegator_identity_id)?;
        let headers = envelope.headers()?;

        self.transport
            .get(envelope.relative_uri(), Some(&headers))
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))
    }
}

impl<T: LedgerTransport> RequestAuthorisationApi for AuthorisationService<T> {
    fn build_authorisation(
        &self,
        key_pair: &KeyPair,
        payload: &str,
        delegator_identity_id: Option<&str>,
    ) -> Result<Seal, RequestError> {
        Ok(authorisation::build_authorisation(
            key_pair,
            payload,
            delegator_identity_id,
        )?)
    }

    fn prepare(
        &self,
        payload: &Value,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<DraftEnvelope, RequestError> {
        request::prepare(payload, key_pair, delegator_identity_id)
    }

    fn add_signature(
        &self,
        draft: DraftEnvelope,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<DraftEnvelope, RequestError> {
        request::add_signature(draft, key_pair, delegator_identity_id)
    }

    fn finalize(
        &self,
        draft: DraftEnvelope,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<AuthenticationEnvelope, RequestError> {
        request::finalize(draft, key_pair, delegator_identity_id)
    }

    fn authenticate_read(
        &self,
        resource: &str,
        key_pair: &KeyPair,
        delegator_identity_id: Option<&str>,
    ) -> Result<ReadEnvelope, RequestError> {
        let node_id = self
            .config
            .node_id
            .as_deref()
            .ok_or(ConfigError::MissingNodeId)?;

        ReadRequest::new(self.config.api_path(resource), node_id)
            .authenticate(key_pair, delegator_identity_id)
    }
}
