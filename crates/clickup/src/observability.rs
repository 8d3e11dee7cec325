//! Structured logging for HTTP round trips
//!
//! Every request sent by the transport is described here as `tracing` events
//! at debug level. Nothing is printed unless the embedding application
//! installs a subscriber. Credentials are never part of the metadata.

use std::time::{Duration, Instant};
use tracing::debug;

/// HTTP request metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request path, relative to the base URL
    pub path: String,
    /// Request body size in bytes, when known up front
    pub body_size: Option<usize>,
    /// Whether an `Authorization` header is attached
    pub authenticated: bool,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body_size: None,
            authenticated: false,
        }
    }

    /// Set the request body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Record whether the request carries a credential
    pub fn with_authentication(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(
            method = %self.method,
            path = %self.path,
            body_size = self.body_size,
            authenticated = self.authenticated,
            "Sending HTTP request"
        );
    }
}

/// HTTP response metadata for structured logging
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,
    /// Response body size in bytes
    pub body_size: usize,
    /// Time elapsed for the request
    pub elapsed: Duration,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: u16, body_size: usize, elapsed: Duration) -> Self {
        Self {
            status,
            body_size,
            elapsed,
        }
    }

    /// Log the received response
    pub fn log_response(&self, request: &RequestMetadata) {
        debug!(
            method = %request.method,
            path = %request.path,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis(),
            body_size = self.body_size,
            "Received HTTP response"
        );
    }
}

/// Timer for measuring request duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_metadata_creation() {
        let metadata = RequestMetadata::new("GET", "/v2/task/abc");
        assert_eq!(metadata.method, "GET");
        assert_eq!(metadata.path, "/v2/task/abc");
        assert_eq!(metadata.body_size, None);
        assert!(!metadata.authenticated);
    }

    #[test]
    fn test_request_metadata_builders() {
        let metadata = RequestMetadata::new("POST", "/v2/list/1/task")
            .with_body_size(64)
            .with_authentication(true);
        assert_eq!(metadata.body_size, Some(64));
        assert!(metadata.authenticated);
    }

    #[test]
    fn test_response_metadata_creation() {
        let elapsed = Duration::from_millis(120);
        let metadata = ResponseMetadata::new(404, 17, elapsed);
        assert_eq!(metadata.status, 404);
        assert_eq!(metadata.body_size, 17);
        assert_eq!(metadata.elapsed, elapsed);
    }

    #[test]
    fn test_request_timer() {
        let timer = RequestTimer::start();
        std::thread::sleep(Duration::from_millis(10));
        assert!(timer.elapsed().as_millis() >= 10);
    }
}
