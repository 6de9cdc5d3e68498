//! # Domain Layer
//!
//! Pure request-signing logic with no I/O dependencies.

pub mod authorisation;
pub mod config;
pub mod envelope;
pub mod errors;
pub mod headers;
pub mod request;
