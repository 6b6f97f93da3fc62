//! Ports
//!
//! Interfaces implemented by infrastructure adapters.

pub mod notifier;

pub use notifier::{validate_webhook_url, CardNotifier, Delivered};
