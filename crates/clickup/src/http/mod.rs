//! HTTP transport layer
//!
//! Request building, authentication headers, response classification and
//! multipart uploads. Every resource service calls through [`Transport`].

pub use multipart::{MultipartUpload, OCTET_STREAM, base_name};
pub use request::RequestDescriptor;
pub use response::Response;
pub use transport::Transport;

mod multipart;
mod request;
mod response;
mod transport;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
