//! # Claims & Endorsement Subsystem (SL-02)
//!
//! Claims are opaque strings that reach the ledger only as their SHA-256
//! digest. An endorsement is a third party's signature binding a subject
//! (and optionally its type) to one claim digest:
//!
//! ```text
//! subject;digest          (no subject type)
//! subject;type;digest     (typed subject, e.g. an asset of a given type)
//! ```
//!
//! The raw claim text is never signed. A verifier has to rebuild the same
//! binding string, which [`endorsement_message`] does for both sides.

pub mod domain;

pub use domain::claims::{claim_digest, claims_header, digest_claims};
pub use domain::endorsement::{
    endorsement_message, endorsement_signature, endorsements, verify_endorsement,
};
