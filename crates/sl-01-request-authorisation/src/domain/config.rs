//! Client configuration with validation.

use serde::{Deserialize, Serialize};
use shared_crypto::ProtocolId;

/// Environment variable overriding [`ClientConfig::api_version`].
pub const ENV_API_VERSION: &str = "SL_API_VERSION";
/// Environment variable overriding [`ClientConfig::node_id`].
pub const ENV_NODE_ID: &str = "SL_NODE_ID";
/// Environment variable overriding [`ClientConfig::default_protocol`].
pub const ENV_DEFAULT_PROTOCOL: &str = "SL_DEFAULT_PROTOCOL";

/// Settings shared by every request a client builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API version segment in request paths (`/api/{version}/...`)
    pub api_version: String,
    /// Node that serves reads; fetched from the node when unset
    pub node_id: Option<String>,
    /// Protocol used for newly generated key pairs
    pub default_protocol: ProtocolId,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_version: "v1".to_string(),
            node_id: None,
            default_protocol: ProtocolId::Sha256WithEcdsa,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `SL_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `SL_*` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(version) = lookup(ENV_API_VERSION) {
            config.api_version = version;
        }
        if let Some(node_id) = lookup(ENV_NODE_ID) {
            config.node_id = Some(node_id);
        }
        if let Some(protocol) = lookup(ENV_DEFAULT_PROTOCOL) {
            config.default_protocol = protocol
                .parse()
                .map_err(|_| ConfigError::UnsupportedProtocol(protocol))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let version = &self.api_version;
        if version.is_empty() || !version.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidApiVersion(version.clone()));
        }

        if matches!(&self.node_id, Some(id) if id.trim().is_empty()) {
            return Err(ConfigError::Invalid("node_id cannot be blank".into()));
        }

        Ok(())
    }

    /// Absolute API path for a resource, e.g. `api_path("identities")` →
    /// `/api/v1/identities`.
    pub fn api_path(&self, resource: &str) -> String {
        format!(
            "/api/{}/{}",
            self.api_version,
            resource.trim_start_matches('/')
        )
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// API version is empty or not a plain path segment
    #[error("invalid api version: {0:?}")]
    InvalidApiVersion(String),
    /// Protocol name not recognised
    #[error("unsupported default protocol: {0}")]
    UnsupportedProtocol(String),
    /// A read was requested but no node id is known
    #[error("node id is not configured")]
    MissingNodeId,
    /// General configuration error
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
