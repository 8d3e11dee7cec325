//! Configuration for the ClickUp client

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::DEFAULT_BASE_URL;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the ClickUp client.
///
/// Immutable once handed to [`Client::from_config`](crate::Client::from_config).
/// An empty credential means requests are sent without an `Authorization`
/// header.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to
    pub base_url: String,

    /// Credential sent verbatim as the `Authorization` header value
    pub credential: SecretString,

    /// `User-Agent` header value
    pub user_agent: String,

    /// Default timeout for requests
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credential: SecretString::new(String::new().into_boxed_str()),
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// `clickup-rs/<version>`
pub fn default_user_agent() -> String {
    format!("clickup-rs/{}", crate::VERSION)
}

impl ClientConfig {
    /// Create a new builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Create a configuration with a credential and defaults for everything else.
    pub fn with_credential(credential: impl Into<String>) -> Self {
        Self {
            credential: SecretString::new(credential.into().into_boxed_str()),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `CLICKUP_API_TOKEN` for the credential
    /// - `CLICKUP_BASE_URL` for the API base URL
    /// - `CLICKUP_TIMEOUT` for the request timeout (in seconds)
    /// - `CLICKUP_USER_AGENT` for the `User-Agent` header
    ///
    /// Unset or unparsable variables leave the default in place.
    pub fn from_env() -> Self {
        use std::env;

        let mut config = Self::default();

        if let Ok(token) = env::var("CLICKUP_API_TOKEN") {
            config.credential = SecretString::new(token.into_boxed_str());
        }

        if let Ok(base_url) = env::var("CLICKUP_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(timeout_str) = env::var("CLICKUP_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.parse::<u64>()
        {
            config.timeout = Duration::from_secs(timeout_secs);
        }

        if let Ok(user_agent) = env::var("CLICKUP_USER_AGENT") {
            config.user_agent = user_agent;
        }

        config
    }

    /// Whether requests carry an `Authorization` header.
    pub fn is_authenticated(&self) -> bool {
        !self.credential.expose_secret().is_empty()
    }

    /// A copy of this configuration with the credential cleared.
    pub fn without_credential(&self) -> Self {
        Self {
            credential: SecretString::new(String::new().into_boxed_str()),
            ..self.clone()
        }
    }
}

/// Builder for creating a [`ClientConfig`] with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the credential. An empty string disables the `Authorization` header.
    pub fn credential(mut self, credential: impl Into<String>) -> Self {
        self.config.credential = SecretString::new(credential.into().into_boxed_str());
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the `User-Agent` header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
