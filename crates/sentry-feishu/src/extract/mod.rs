//! Field Extraction
//!
//! Resolvers that pull human-relevant fields out of loosely-structured
//! issue payloads. None of them fail: absent data yields a sentinel.

mod environment;
mod location;
mod path;
mod project;
mod text;

pub use environment::resolve_environment;
pub use location::{build_location, target_frame};
pub use path::resolve;
pub use project::{describe_project, resolve_project_name, UNKNOWN_PROJECT};
pub use text::{display, is_truthy, known, resolve_text, UNKNOWN};
