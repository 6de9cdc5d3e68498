//! Shared test fixtures.

use async_trait::async_trait;
use sealed_telemetry::{init_telemetry, TelemetryConfig};
use serde_json::{json, Value};
use shared_crypto::{KeyPair, ProtocolId};
use shared_types::Seal;
use sl_01_request_authorisation::{LedgerTransport, ReadHeaders, TransportError, WriteHeaders};
use std::sync::{Arc, Mutex, Once};

static LOGGING: Once = Once::new();

/// Install a test subscriber once per process; `RUST_LOG` still applies.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let config = TelemetryConfig {
            service_name: "sl-tests".to_string(),
            ..TelemetryConfig::from_env()
        };
        // Another harness may already own the global subscriber.
        let _ = init_telemetry(&config);
    });
}

/// Key pair for `identity`, panicking on failure.
pub fn key_pair(identity: &str, protocol_id: ProtocolId) -> KeyPair {
    KeyPair::generate(protocol_id, Some(identity)).expect("key generation")
}

/// Proof document JSON with one Authorisation node signed by `seals`.
pub fn proof_document(payload: &str, seals: &[Seal], signers: &[&KeyPair]) -> String {
    let signatories: Vec<Value> = signers
        .iter()
        .map(|kp| {
            json!({
                "identity": kp.identity_id(),
                "credentials": {"key": kp.public_key(), "protocolId": kp.protocol_id()},
            })
        })
        .collect();

    json!({
        "proof": {
            "nodes": [
                {"id": {"_type": "Request"}, "links": []},
                {
                    "id": {"_type": "Authorisation"},
                    "payload": payload,
                    "links": [{"seals": seals}],
                },
            ],
        },
        "signatories": signatories,
    })
    .to_string()
}

/// One call seen by [`RecordingTransport`].
#[derive(Debug, Clone)]
pub enum TransportCall {
    Put {
        path: String,
        body: String,
        headers: Vec<(&'static str, String)>,
    },
    Get {
        uri: String,
        headers: Option<Vec<(&'static str, String)>>,
    },
}

/// In-memory transport that records requests and plays a node: it answers
/// node-info with a fixed id and echoes the request id of writes.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    pub calls: Arc<Mutex<Vec<TransportCall>>>,
}

pub const NODE_ID: &str = "node-under-test";

impl RecordingTransport {
    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().expect("transport lock").clone()
    }
}

#[async_trait]
impl LedgerTransport for RecordingTransport {
    async fn put(
        &self,
        path: &str,
        body: &str,
        headers: &WriteHeaders,
    ) -> Result<Value, TransportError> {
        self.calls.lock().expect("transport lock").push(TransportCall::Put {
            path: path.to_string(),
            body: body.to_string(),
            headers: headers.pairs(),
        });
        Ok(json!({"requestId": headers.request_id, "resources": []}))
    }

    async fn get(
        &self,
        relative_uri: &str,
        headers: Option<&ReadHeaders>,
    ) -> Result<Value, TransportError> {
        self.calls.lock().expect("transport lock").push(TransportCall::Get {
            uri: relative_uri.to_string(),
            headers: headers.map(ReadHeaders::pairs),
        });
        if relative_uri.ends_with("/node-info") {
            return Ok(json!({"nodeId": NODE_ID}));
        }
        Ok(json!({"uri": relative_uri}))
    }
}
