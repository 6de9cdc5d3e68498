//! # Ports Layer
//!
//! - **Inbound (Driving)**: API that callers use
//! - **Outbound (Driven)**: the transport this subsystem hands envelopes to

pub mod inbound;
pub mod outbound;
