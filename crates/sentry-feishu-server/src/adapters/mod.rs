//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod feishu;

// Re-exports
pub use feishu::FeishuNotifier;
