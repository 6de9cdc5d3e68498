//! # Proof Verification Subsystem (SL-03)
//!
//! Checks the seals inside a proof document fetched back from the ledger.
//!
//! ## Algorithm
//!
//! 1. Find the one node whose `id._type` is `"Authorisation"`; its `payload`
//!    is the string the seals signed.
//! 2. For each seal of that node's first link, look up the signatory's key
//!    and verify the seal over the payload.
//! 3. Report one outcome per seal, in seal order.
//!
//! A bad seal is an outcome, never an error. Errors are reserved for
//! documents whose structure makes step 1 or 2 impossible.
//!
//! Pure and read-only: no network, no signing keys.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

pub use domain::entities::{
    Credentials, NodeId, Proof, ProofDocument, ProofLink, ProofNode, ProofSeal, Signatory,
};
pub use domain::errors::ProofError;
pub use domain::verifier::{
    verify_proof, verify_proof_json, ProofReport, SealOutcome, SignatoryReport,
    AUTHORISATION_NODE_TYPE,
};
