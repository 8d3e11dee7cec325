//! API resource endpoints
//!
//! One service per ClickUp resource family. Each service is a thin wrapper
//! that builds a path, checks identifiers locally, and calls through the
//! shared [`Transport`]. Errors are labelled with the operation that failed.

pub mod attachments;
pub mod auth;
pub mod comments;
pub mod folders;
pub mod goals;
pub mod lists;
pub mod spaces;
pub mod tasks;
pub mod teams;
pub mod time_tracking;
pub mod webhooks;

pub use attachments::Attachments;
pub use auth::Auth;
pub use comments::Comments;
pub use folders::Folders;
pub use goals::Goals;
pub use lists::Lists;
pub use spaces::Spaces;
pub use tasks::Tasks;
pub use teams::Teams;
pub use time_tracking::TimeTracking;
pub use webhooks::Webhooks;

use url::form_urlencoded;

use crate::error::{Error, Result};
use crate::http::Transport;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the transport.
    fn transport(&self) -> &Transport;
}

/// Check that an identifier is present, returning it without surrounding
/// whitespace.
///
/// # Errors
///
/// Returns [`Error::MissingIdentifier`] naming `name` when `value` is empty
/// or only whitespace. No request is made.
pub(crate) fn require_id<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingIdentifier(name));
    }
    Ok(trimmed)
}

/// Append a URL-encoded query string to `path`. Returns `path` unchanged
/// when there are no pairs.
pub(crate) fn with_query<K, V>(path: String, pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if pairs.is_empty() {
        return path;
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish();
    format!("{path}?{query}")
}

/// `archived=<bool>` query used by the hierarchy listings.
pub(crate) fn archived_query(archived: bool) -> [(&'static str, String); 1] {
    [("archived", archived.to_string())]
}
