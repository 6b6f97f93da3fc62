//! Domain Entities

mod card;
mod fields;
mod ignore_list;

pub use card::{
    CardAction, CardConfig, CardElement, CardHeader, CardText, ChatCard, InteractiveMessage,
    TextTag,
};
pub use fields::{NormalizedFields, DEFAULT_LEVEL, NO_MESSAGE, UNKNOWN_ISSUE};
pub use ignore_list::IgnoreList;
