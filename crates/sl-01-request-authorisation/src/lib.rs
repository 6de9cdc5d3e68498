//! # Request Authorisation Subsystem (SL-01)
//!
//! Turns a domain payload plus one or more signer key pairs into the
//! authentication envelope a ledger node accepts.
//!
//! ## Architecture
//!
//! Hexagonal, like the other Sealed-Ledger subsystems:
//! - **Domain Layer** (`domain/`): seal construction, draft envelopes, header values
//! - **Ports Layer** (`ports/`): inbound API trait, outbound transport trait
//! - **Service Layer** (`service.rs`): wires the domain to a transport
//!
//! ## Request Shapes
//!
//! - **Read**: one authentication seal over the relative URI.
//! - **Write**: `prepare` → `add_signature`* → `finalize`. The authentication
//!   seal signs the `;`-joined authorisation signatures, so authorisation
//!   order is part of what gets signed.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::authorisation::{authentication_message, build_authorisation};
pub use domain::config::{ClientConfig, ConfigError};
pub use domain::envelope::{AuthenticationEnvelope, ReadEnvelope};
pub use domain::errors::RequestError;
pub use domain::headers::{ReadHeaders, WriteHeaders};
pub use domain::request::{add_signature, finalize, prepare, DraftEnvelope, ReadRequest};
pub use ports::inbound::RequestAuthorisationApi;
pub use ports::outbound::{LedgerTransport, TransportError};
pub use service::AuthorisationService;
