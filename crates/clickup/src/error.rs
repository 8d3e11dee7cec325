//! Error types for the ClickUp client
//!
//! Every failure surfaces as one [`Error`] enum built with `thiserror`. Callers
//! that need to branch on the failure class use [`Error::kind`]; callers that
//! need the remote status code use [`Error::api_error`] or
//! [`Error::status_code`], both of which look through operation labels added
//! by the resource services.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for operations that can fail with a client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the ClickUp client.
#[derive(Debug, Error)]
pub enum Error {
    /// A required path identifier was empty. Raised before any request is sent.
    #[error("missing required identifier: {0}")]
    MissingIdentifier(&'static str),

    /// The request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Invalid HTTP header name supplied by the caller.
    #[error("invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value supplied by the caller.
    #[error("invalid HTTP header value for {0}")]
    InvalidHeaderValue(String),

    /// Client configuration was rejected at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Local I/O failure, e.g. opening a file for upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The remote API answered with a status code of 400 or above.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request could not be built or the network round trip failed.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The absolute request URL could not be parsed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The concatenated URL that failed to parse
        url: String,
        /// Parser error
        reason: String,
    },

    /// The call was cancelled through its [`CallContext`](crate::CallContext).
    #[error("request cancelled")]
    Cancelled,

    /// The deadline of the call's [`CallContext`](crate::CallContext) elapsed.
    #[error("request deadline exceeded")]
    DeadlineExceeded,

    /// The request succeeded but the body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// An error labelled with the operation that produced it.
    #[error("{context}: {source}")]
    WithContext {
        /// Short description of the failing operation
        context: String,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },
}

/// Broad failure class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input rejected before any network activity.
    Validation,
    /// Request construction or network execution failed; no status code.
    Transport,
    /// Remote status code of 400 or above.
    Api,
    /// Successful status but the body did not decode.
    Decode,
}

impl Error {
    /// Classify this error, looking through operation labels.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingIdentifier(_)
            | Error::Serialization(_)
            | Error::InvalidHeaderName(_)
            | Error::InvalidHeaderValue(_)
            | Error::InvalidConfig(_)
            | Error::Io(_) => ErrorKind::Validation,
            Error::Transport(_)
            | Error::InvalidUrl { .. }
            | Error::Cancelled
            | Error::DeadlineExceeded => ErrorKind::Transport,
            Error::Api(_) => ErrorKind::Api,
            Error::Decode(_) => ErrorKind::Decode,
            Error::WithContext { source, .. } => source.kind(),
        }
    }

    /// The typed API error at the root of this error, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api) => Some(api),
            Error::WithContext { source, .. } => source.api_error(),
            _ => None,
        }
    }

    /// The remote HTTP status code, if this error came from an API response.
    pub fn status_code(&self) -> Option<u16> {
        self.api_error().map(|api| api.status_code)
    }

    /// Whether the underlying transport failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::DeadlineExceeded => true,
            Error::Transport(e) => e.is_timeout(),
            Error::WithContext { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// Add context to an error.
    pub fn context<C>(self, context: C) -> Self
    where
        C: std::fmt::Display,
    {
        Error::WithContext {
            context: context.to_string(),
            source: Box::new(self),
        }
    }
}

/// Error returned by the API for responses with status 400 or above.
///
/// `message` is never empty: when the body carries no usable message the
/// standard reason phrase of the status code is used instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("API error (status {status_code}): {message}")]
pub struct ApiError {
    /// HTTP status code
    pub status_code: u16,
    /// Normalized, human-readable message
    pub message: String,
}

/// Shapes of error body the API is known to return.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    /// Parse a response body. Anything other than a JSON object whose known
    /// fields are strings yields an empty body.
    fn parse(body: &[u8]) -> Self {
        match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value @ serde_json::Value::Object(_)) => {
                serde_json::from_value(value).unwrap_or_default()
            }
            _ => Self::default(),
        }
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

type MessageExtractor = fn(&ErrorBody) -> Option<&str>;

/// Extraction strategies, tried in order. The first non-empty match wins.
const MESSAGE_EXTRACTORS: &[MessageExtractor] = &[ErrorBody::message, ErrorBody::error];

impl ApiError {
    /// Create an API error from a status code and message.
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    /// Normalize a failed response into an API error.
    ///
    /// Pure function of `(status, body)`: `message`, then `error` from a JSON
    /// object body, then the reason phrase of `status`.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed = ErrorBody::parse(body);

        let message = MESSAGE_EXTRACTORS
            .iter()
            .filter_map(|extract| extract(&parsed))
            .find(|candidate| !candidate.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| status_text(status));

        Self::new(status, message)
    }
}

/// Standard reason phrase for `status`, e.g. `502` → `"Bad Gateway"`.
pub fn status_text(status: u16) -> String {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("status code {status}"))
}
