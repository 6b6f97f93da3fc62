//! Domain Layer
//!
//! - `entities/`: card, normalized fields, ignore list
//! - `value_objects/`: severity, project identifiers
//! - `errors`: rejection and delivery failures

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::{DeliveryError, Rejected};
pub use value_objects::{HeaderTemplate, ProjectRef, Severity};
