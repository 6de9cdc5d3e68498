//! # Signing Flows
//!
//! End-to-end scenarios across the protocol engine, request assembler,
//! claims engine and proof verifier.

#[cfg(test)]
mod tests {
    use super::super::fixtures::{key_pair, proof_document};
    use serde_json::json;
    use shared_crypto::{decode_base64url, encode_base64url, sign, verify, KeyPair, ProtocolId};
    use shared_types::{decode_header_value, ClaimsHeader, Seal};
    use sl_01_request_authorisation::{
        add_signature, build_authorisation, finalize, prepare, AuthenticationEnvelope,
        DraftEnvelope, ReadEnvelope,
    };
    use sl_02_claims_endorsement::{
        claim_digest, claims_header, digest_claims, endorsement_signature, endorsements,
        verify_endorsement,
    };
    use sl_03_proof_verification::{verify_proof_json, ProofReport, SealOutcome};

    // =========================================================================
    // PROTOCOL ENGINE
    // =========================================================================

    #[test]
    fn test_sign_verify_every_protocol() {
        for protocol_id in ProtocolId::ALL {
            let signer = key_pair("signer", protocol_id);
            for message in ["a", "{\"x\":1}", "ünïcödé;with;separators"] {
                let signature = sign(protocol_id, signer.private_key(), message).unwrap();
                assert!(verify(protocol_id, signer.public_key(), message, &signature).unwrap());
            }
        }
    }

    #[test]
    fn test_base64url_reencodes_canonically() {
        for len in 0..64u8 {
            let bytes: Vec<u8> = (0..len).map(|i| i.wrapping_mul(37) ^ 0xfb).collect();
            let encoded = encode_base64url(&bytes);

            assert!(!encoded.contains(['+', '/', '=']));
            assert_eq!(encode_base64url(decode_base64url(&encoded).unwrap()), encoded);
        }
    }

    // =========================================================================
    // REQUEST ASSEMBLY
    // =========================================================================

    #[test]
    fn test_single_signer_end_to_end() {
        let a = key_pair("A", ProtocolId::Sha256WithEcdsa);

        let draft = prepare(&json!({"x": 1}), &a, None).unwrap();
        assert_eq!(draft.authorisations().len(), 1);

        let envelope = finalize(draft, &a, None).unwrap();
        let authorisation = &envelope.authorisations()[0];

        assert_eq!(envelope.authentication_message(), authorisation.signature);
        assert!(a
            .verify(&authorisation.signature, &envelope.authentication().signature)
            .unwrap());
        assert!(a.verify(envelope.body(), &authorisation.signature).unwrap());
    }

    #[test]
    fn test_co_signed_with_delegated_authentication() {
        let a = key_pair("A", ProtocolId::Sha256WithEcdsa);
        let b = key_pair("B", ProtocolId::Sha256WithRsa);
        let c = key_pair("C", ProtocolId::Sha256WithEcdsa);

        let draft = prepare(&json!({"x": 1}), &a, None).unwrap();
        let draft = add_signature(draft, &b, None).unwrap();
        let envelope = finalize(draft, &c, Some("A")).unwrap();

        let sig_a = &envelope.authorisations()[0].signature;
        let sig_b = &envelope.authorisations()[1].signature;
        let expected_message = format!("{sig_a};{sig_b}");

        let authentication = envelope.authentication();
        assert_eq!(envelope.authentication_message(), expected_message);
        assert_eq!(authentication.identity_id, "A");
        assert_eq!(authentication.delegate_identity_id.as_deref(), Some("C"));
        assert!(c.verify(&expected_message, &authentication.signature).unwrap());
        assert!(!a.verify(&expected_message, &authentication.signature).unwrap());

        // Headers decode back to exactly what was signed.
        let headers = envelope.headers().unwrap();
        let decoded: Seal = decode_header_value(&headers.authentication).unwrap();
        let decoded_authorisations: Vec<Seal> =
            decode_header_value(&headers.authorisations).unwrap();
        assert_eq!(&decoded, authentication);
        assert_eq!(decoded_authorisations, envelope.authorisations());
    }

    #[test]
    fn test_delegation_verifies_only_under_delegate() {
        let delegate = key_pair("delegate", ProtocolId::Sha256WithEcdsa);
        let delegator = key_pair("delegator", ProtocolId::Sha256WithEcdsa);

        let seal = build_authorisation(&delegate, "payload", Some("delegator")).unwrap();

        assert_eq!(seal.identity_id, "delegator");
        assert_eq!(seal.delegate_identity_id.as_deref(), Some("delegate"));
        assert!(delegate.verify("payload", &seal.signature).unwrap());
        assert!(!delegator.verify("payload", &seal.signature).unwrap());
    }

    #[test]
    fn test_authorisation_order_is_signed() {
        let a = key_pair("A", ProtocolId::Sha256WithEcdsa);
        let b = key_pair("B", ProtocolId::Sha256WithEcdsa);
        let draft = DraftEnvelope::new(&json!({"x": 1})).unwrap();

        let ab = draft
            .clone()
            .prepare(&a, None)
            .and_then(|d| d.add_signature(&b, None))
            .and_then(|d| d.finalize(&a, None))
            .unwrap();
        let ba = draft
            .prepare(&b, None)
            .and_then(|d| d.add_signature(&a, None))
            .and_then(|d| d.finalize(&a, None))
            .unwrap();

        assert_ne!(ab.authentication().signature, ba.authentication().signature);

        // Replaying the signed order verifies; the swapped order does not.
        let seals = [ab.authentication().clone()];
        let correct = proof_document(&ab.authentication_message(), &seals, &[&a]);
        let report = verify_proof_json(&correct).unwrap();
        assert!(report.all_valid());

        let swapped = proof_document(&ba.authentication_message(), &seals, &[&a]);
        let report = verify_proof_json(&swapped).unwrap();
        assert_eq!(report.signatories[0].outcome, SealOutcome::Invalid);
    }

    #[test]
    fn test_proof_over_request_body() {
        let a = key_pair("A", ProtocolId::Sha256WithEcdsa);
        let b = key_pair("B", ProtocolId::Sha256WithRsa);

        let draft = prepare(&json!({"transfer": 10}), &a, None).unwrap();
        let envelope = finalize(add_signature(draft, &b, None).unwrap(), &a, None).unwrap();

        let proof = proof_document(envelope.body(), envelope.authorisations(), &[&a, &b]);
        let report = verify_proof_json(&proof).unwrap();

        assert_eq!(report.payload, envelope.body());
        assert!(report.all_valid());
        let ids: Vec<_> = report.signatories.iter().map(|s| s.identity_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    // =========================================================================
    // CLAIMS & ENDORSEMENTS
    // =========================================================================

    #[test]
    fn test_endorsement_binding() {
        let endorser = key_pair("E", ProtocolId::Sha256WithEcdsa);
        let digest = claim_digest("k:v");

        let untyped = endorsement_signature("S", "k:v", &endorser, None).unwrap();
        let typed = endorsement_signature("S", "k:v", &endorser, Some("T")).unwrap();

        assert!(endorser.verify(&format!("S;{digest}"), &untyped).unwrap());
        assert!(endorser.verify(&format!("S;T;{digest}"), &typed).unwrap());
        assert_ne!(untyped, typed);
    }

    #[test]
    fn test_claims_request_with_endorsements() {
        let endorser = key_pair("E", ProtocolId::Sha256WithRsa);
        let claims = ["name:Alice", "role:admin"];

        let digests = digest_claims(&claims);
        let batch = endorsements("S", &claims, &endorser, None).unwrap();

        let payload = json!({
            "_type": "CreateIdentityEndorsementsRequest",
            "subjectId": "S",
            "endorserId": "E",
            "endorsements": batch,
        });
        let draft = prepare(&payload, &endorser, None).unwrap();
        let envelope = finalize(draft, &endorser, None)
            .unwrap()
            .with_claims(claims_header(&claims));

        let headers = envelope.headers().unwrap();
        let decoded: ClaimsHeader = decode_header_value(headers.claims.as_deref().unwrap()).unwrap();
        assert_eq!(decoded.len(), 2);
        for (digest, claim) in digests.iter().zip(claims) {
            assert_eq!(decoded[digest], claim);
            assert!(verify_endorsement(
                "S",
                claim,
                endorser.protocol_id(),
                endorser.public_key(),
                &batch[digest],
                None,
            )
            .unwrap());
        }
        assert_eq!(headers.pairs().len(), 3);
    }

    // =========================================================================
    // THREAD SAFETY
    // =========================================================================

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_envelope_types_are_send_sync() {
        assert_send_sync::<KeyPair>();
        assert_send_sync::<Seal>();
        assert_send_sync::<DraftEnvelope>();
        assert_send_sync::<AuthenticationEnvelope>();
        assert_send_sync::<ReadEnvelope>();
        assert_send_sync::<ProofReport>();
    }
}
