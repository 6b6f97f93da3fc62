//! Sentry to Feishu Domain Library
//!
//! Turns Sentry issue webhooks into Feishu interactive cards.
//!
//! # Architecture
//!
//! - **Domain** (`domain/`): card model, normalized fields, ignore list, errors
//! - **Extraction** (`extract/`): nested-path resolver and the field resolvers
//!   built on it (location, environment, project)
//! - **Services** (`services/`): `PayloadNormalizer` and `CardRenderer`
//! - **Ports** (`ports/`): `CardNotifier`, implemented by the server's HTTP adapter
//!
//! # Usage
//!
//! ```rust,ignore
//! use sentry_feishu::{CardRenderer, IgnoreList, PayloadNormalizer};
//!
//! let normalizer = PayloadNormalizer::new(IgnoreList::parse("[42, \"my-project\"]"));
//! let event = normalizer.normalize(&raw)?;
//! let card = CardRenderer::new().render(&event.issue);
//! ```

pub mod domain;
pub mod extract;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{
    CardElement, ChatCard, DeliveryError, HeaderTemplate, IgnoreList, InteractiveMessage,
    NormalizedFields, ProjectRef, Rejected, Severity,
};
pub use ports::{validate_webhook_url, CardNotifier, Delivered};
pub use services::{CardRenderer, NormalizedEvent, PayloadNormalizer};
