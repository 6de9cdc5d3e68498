//! # Sealed-Ledger Protocol Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | shared-crypto | sign / verify per protocol |
//! | sl-01 | prepare → add_signature → finalize with N signers |
//! | sl-02 | endorse a batch of claims |
//! | sl-03 | verify a proof with N seals |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::json;
use shared_crypto::{sign, verify, KeyPair, ProtocolId};
use sl_01_request_authorisation::{add_signature, finalize, prepare};
use sl_02_claims_endorsement::endorsements;
use sl_03_proof_verification::verify_proof_json;
use sl_tests::integration::fixtures::proof_document;
use std::time::Duration;

fn bench_protocols(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared-crypto");
    group.measurement_time(Duration::from_secs(10));

    let message = "{\"requestId\":\"bench\",\"x\":1}";
    for protocol_id in ProtocolId::ALL {
        let key_pair = KeyPair::generate(protocol_id, Some("bench")).expect("keygen");
        let signature = key_pair.sign(message).expect("sign");

        group.bench_function(BenchmarkId::new("sign", protocol_id.as_str()), |b| {
            b.iter(|| black_box(sign(protocol_id, key_pair.private_key(), message)))
        });
        group.bench_function(BenchmarkId::new("verify", protocol_id.as_str()), |b| {
            b.iter(|| {
                black_box(verify(
                    protocol_id,
                    key_pair.public_key(),
                    message,
                    &signature,
                ))
            })
        });
    }

    group.finish();
}

fn signers(count: usize) -> Vec<KeyPair> {
    (0..count)
        .map(|i| {
            let identity = format!("signer-{i}");
            KeyPair::generate(ProtocolId::Sha256WithEcdsa, Some(identity.as_str())).expect("keygen")
        })
        .collect()
}

fn bench_request_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("sl-01-request-authorisation");

    for count in [1, 3, 10] {
        let key_pairs = signers(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("multi_signer", count), &key_pairs, |b, kps| {
            b.iter(|| {
                let mut draft = prepare(&json!({"x": 1}), &kps[0], None).expect("prepare");
                for kp in &kps[1..] {
                    draft = add_signature(draft, kp, None).expect("add_signature");
                }
                black_box(finalize(draft, &kps[0], None).expect("finalize"))
            })
        });
    }

    group.finish();
}

fn bench_endorsements(c: &mut Criterion) {
    let mut group = c.benchmark_group("sl-02-claims-endorsement");
    let endorser = KeyPair::generate(ProtocolId::Sha256WithEcdsa, Some("endorser")).expect("keygen");

    for size in [10, 100, 500] {
        let claims: Vec<String> = (0..size).map(|i| format!("claim-{i}")).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("endorse_batch", size), &claims, |b, claims| {
            b.iter(|| black_box(endorsements("subject", claims, &endorser, None)))
        });
    }

    group.finish();
}

fn bench_proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("sl-03-proof-verification");
    let payload = "{\"x\":1}";

    for count in [1, 10, 50] {
        let key_pairs = signers(count);
        let seals: Vec<_> = key_pairs
            .iter()
            .map(|kp| {
                sl_01_request_authorisation::build_authorisation(kp, payload, None).expect("seal")
            })
            .collect();
        let refs: Vec<&KeyPair> = key_pairs.iter().collect();
        let proof = proof_document(payload, &seals, &refs);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("verify_proof", count), &proof, |b, proof| {
            b.iter(|| black_box(verify_proof_json(proof)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_protocols,
    bench_request_assembly,
    bench_endorsements,
    bench_proof_verification
);
criterion_main!(benches);
