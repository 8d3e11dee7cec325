//! Request and response types for the ClickUp API
//!
//! Response types are lenient: optional fields default when the API leaves
//! them out, so a missing field never turns a successful call into a decode
//! error. Identifiers are always exposed as strings even where the API
//! returns numbers.

pub use attachment::*;
pub use comment::*;
pub use goal::*;
pub use hierarchy::*;
pub use task::*;
pub use time_entry::*;
pub use user::*;
pub use webhook::*;

pub mod attachment;
pub mod comment;
pub mod goal;
pub mod hierarchy;
pub mod task;
pub mod time_entry;
pub mod timestamp;
pub mod user;
pub mod webhook;

use serde::{Deserialize, Deserializer};

/// Deserialize an identifier the API sends either as a string or a number.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

/// Like [`id_string`] for optional identifiers.
pub(crate) fn optional_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "id_string")] String);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(id)| id))
}
