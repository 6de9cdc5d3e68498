//! # Service Round Trips
//!
//! `AuthorisationService` driving a recording transport, the way an HTTP
//! client would plug in.

#[cfg(test)]
mod tests {
    use super::super::fixtures::{init_logging, RecordingTransport, TransportCall, NODE_ID};
    use serde_json::json;
    use shared_types::{Seal, AUTHENTICATION_HEADER, AUTHORISATIONS_HEADER};
    use sl_01_request_authorisation::{
        AuthorisationService, ClientConfig, RequestAuthorisationApi,
    };

    async fn service() -> AuthorisationService<RecordingTransport> {
        init_logging();
        AuthorisationService::connect(RecordingTransport::default(), ClientConfig::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_write_round_trip() {
        let service = service().await;
        let alice = service.generate_key_pair(Some("alice")).unwrap();

        let payload = json!({"_type": "IssueIdentityRequest", "identityId": "alice"});
        let draft = service.prepare(&payload, &alice, None).unwrap();
        let envelope = service.finalize(draft, &alice, None).unwrap();

        let response = service.submit_write("identities", &envelope).await.unwrap();
        assert_eq!(response["requestId"], envelope.request_id());

        let calls = service.transport().calls();
        assert_eq!(calls.len(), 2, "node-info then the write");
        let TransportCall::Put { path, body, headers } = &calls[1] else {
            panic!("expected a put, got {:?}", calls[1]);
        };

        assert_eq!(path, "/api/v1/identities");
        assert_eq!(body, envelope.body());
        let names: Vec<_> = headers.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec![AUTHENTICATION_HEADER, AUTHORISATIONS_HEADER]);

        let authentication = Seal::from_header_value(&headers[0].1).unwrap();
        assert!(alice
            .verify(&envelope.authentication_message(), &authentication.signature)
            .unwrap());
    }

    #[tokio::test]
    async fn test_read_round_trip() {
        let service = service().await;
        let alice = service.generate_key_pair(Some("alice")).unwrap();

        service
            .submit_read("identities/alice", &alice, None)
            .await
            .unwrap();

        let calls = service.transport().calls();
        let TransportCall::Get {
            uri,
            headers: Some(headers),
        } = &calls[1]
        else {
            panic!("expected an authenticated get, got {:?}", calls[1]);
        };

        assert!(uri.starts_with("/api/v1/identities/alice?requestId="));
        assert!(uri.ends_with(&format!("&nodeId={NODE_ID}")));
        assert_eq!(headers.len(), 1);

        let seal = Seal::from_header_value(&headers[0].1).unwrap();
        assert!(alice.verify(uri, &seal.signature).unwrap());
    }

    #[tokio::test]
    async fn test_delegated_read() {
        let service = service().await;
        let delegate = service.generate_key_pair(Some("delegate")).unwrap();

        let envelope = service
            .authenticate_read("identities/org", &delegate, Some("org"))
            .unwrap();

        assert_eq!(envelope.authentication().identity_id, "org");
        assert_eq!(
            envelope.authentication().delegate_identity_id.as_deref(),
            Some("delegate")
        );
        assert!(delegate
            .verify(envelope.relative_uri(), &envelope.authentication().signature)
            .unwrap());
    }
}
