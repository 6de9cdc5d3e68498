//! # Shared Types Crate
//!
//! Wire-level types shared by the request, claims and proof crates.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Seal` and the header encodings live here only.
//! - **Independent Headers**: authentication, authorisations and claims are
//!   three separately encoded values, never nested in one another.

pub mod entities;
pub mod envelope;
pub mod errors;

pub use entities::*;
pub use envelope::*;
pub use errors::*;
