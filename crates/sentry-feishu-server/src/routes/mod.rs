//! API Routes
//!
//! - /webhook/sentry - Sentry issue intake
//! - /test/feishu - synthetic delivery check
//! - / and /health - liveness

pub mod feishu;
pub mod health;
pub mod sentry;
pub mod swagger;
