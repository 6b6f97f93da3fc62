//! Domain Services

pub mod normalizer;
pub mod renderer;

pub use normalizer::{
    unwrap_envelope, NormalizedEvent, PayloadNormalizer, CREATED_ACTION, DIRECT_ACTION,
};
pub use renderer::{truncate_message, CardRenderer, CARD_TITLE, MAX_MESSAGE_CHARS};
