//! Value Objects
//!
//! Immutable values with no identity of their own.

mod project_ref;
mod severity;

pub use project_ref::ProjectRef;
pub use severity::{HeaderTemplate, Severity};
