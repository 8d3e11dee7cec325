//! HTTP response handling

use crate::error::{ApiError, Error, Result};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// A fully-read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    elapsed: Duration,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>, elapsed: Duration) -> Self {
        Self {
            status,
            headers,
            body,
            elapsed,
        }
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Get the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Time spent on the round trip, including reading the body.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Check if the response is successful (status below 400).
    pub fn is_success(&self) -> bool {
        !self.is_error()
    }

    /// Check if the response is an error (status 400 or above).
    pub fn is_error(&self) -> bool {
        self.status.as_u16() >= 400
    }

    /// Normalize this response into an [`ApiError`], regardless of status.
    pub fn api_error(&self) -> ApiError {
        ApiError::from_response(self.status.as_u16(), &self.body)
    }

    /// Parse the body as JSON without looking at the status.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Error::Decode)
    }

    /// Decode a successful response, converting error statuses to [`Error::Api`].
    pub fn parse_result<T: DeserializeOwned>(self) -> Result<T> {
        if self.is_error() {
            return Err(Error::Api(self.api_error()));
        }
        self.json()
    }

    /// Check the status and drop the body.
    pub fn discard(self) -> Result<()> {
        if self.is_error() {
            return Err(Error::Api(self.api_error()));
        }
        Ok(())
    }
}
