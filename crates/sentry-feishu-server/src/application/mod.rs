//! Application Services (Use Cases)
//!
//! Orchestrate domain services and the delivery port.

pub mod relay_service;

pub use relay_service::{RelayError, RelayOutcome, RelayService};
