//! # Domain Layer

pub mod claims;
pub mod endorsement;
