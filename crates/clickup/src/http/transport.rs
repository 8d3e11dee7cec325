//! Transport core shared by every resource
//!
//! The transport turns a [`RequestDescriptor`] into an outbound request with
//! consistent headers, executes it under a [`CallContext`], and classifies
//! the result: status below 400 is decoded into the caller's type, anything
//! else becomes an [`ApiError`](crate::ApiError).
//!
//! Default headers, applied before caller overrides:
//! - `Content-Type: application/json` (JSON requests only)
//! - `User-Agent: <configured user agent>`
//! - `Authorization: <credential>` verbatim, only when the credential is non-empty

use std::sync::Arc;

use http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method};
use reqwest::multipart::{Form, Part};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::AsyncRead;
use tokio_util::io::ReaderStream;
use url::Url;

use super::multipart::{MultipartUpload, OCTET_STREAM};
use super::{RequestDescriptor, Response};
use crate::config::ClientConfig;
use crate::context::CallContext;
use crate::error::{Error, Result};
use crate::observability::{RequestMetadata, RequestTimer, ResponseMetadata};

const APPLICATION_JSON: &str = "application/json";

/// HTTP transport for the ClickUp API.
///
/// Cheap to clone; clones share the connection pool and configuration.
/// Holds no mutable state.
#[derive(Debug, Clone)]
pub struct Transport {
    inner: Arc<TransportInner>,
}

#[derive(Debug)]
struct TransportInner {
    /// HTTP client for making requests
    http_client: reqwest::Client,
    /// Immutable client configuration
    config: ClientConfig,
    /// Pre-validated `User-Agent` value
    user_agent: HeaderValue,
    /// Pre-validated `Authorization` value; `None` when the credential is empty
    authorization: Option<HeaderValue>,
}

impl Transport {
    /// Build a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The base URL is blank, unparsable, or not `http`/`https`
    /// - The user agent or credential is not a valid header value
    /// - The HTTP client cannot be initialized
    pub fn new(config: ClientConfig) -> Result<Self> {
        validate_base_url(&config.base_url)?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Transport)?;

        Self::with_client(config, http_client)
    }

    fn with_client(config: ClientConfig, http_client: reqwest::Client) -> Result<Self> {
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| Error::InvalidHeaderValue(USER_AGENT.to_string()))?;

        let authorization = if config.is_authenticated() {
            let mut value = HeaderValue::from_str(config.credential.expose_secret())
                .map_err(|_| Error::InvalidHeaderValue(AUTHORIZATION.to_string()))?;
            value.set_sensitive(true);
            Some(value)
        } else {
            None
        };

        Ok(Self {
            inner: Arc::new(TransportInner {
                http_client,
                config,
                user_agent,
                authorization,
            }),
        })
    }

    /// A transport that shares this one's connection pool and settings but
    /// never sends an `Authorization` header.
    pub fn unauthenticated(&self) -> Self {
        Self {
            inner: Arc::new(TransportInner {
                http_client: self.inner.http_client.clone(),
                config: self.inner.config.without_credential(),
                user_agent: self.inner.user_agent.clone(),
                authorization: None,
            }),
        }
    }

    /// The configuration this transport was built from.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Base URL every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.inner.config.base_url
    }

    /// Whether requests carry an `Authorization` header.
    pub fn is_authenticated(&self) -> bool {
        self.inner.authorization.is_some()
    }

    /// Send a request and read the full response.
    ///
    /// The response is returned whatever its status; use
    /// [`Response::parse_result`] or [`Response::discard`] to classify it.
    ///
    /// # Errors
    ///
    /// Returns a transport-kind error if the URL is invalid, the network
    /// call fails, or the context is cancelled or expires.
    pub async fn send(&self, ctx: &CallContext, request: RequestDescriptor) -> Result<Response> {
        let (method, path, body, overrides) = request.into_parts();
        let url = self.url(&path)?;

        let mut headers = self.default_headers();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.extend(overrides);

        let mut metadata = RequestMetadata::new(method.as_str(), &path)
            .with_authentication(headers.contains_key(AUTHORIZATION));

        let mut builder = self.inner.http_client.request(method, url).headers(headers);
        if let Some(body) = body {
            metadata = metadata.with_body_size(body.len());
            builder = builder.body(body);
        }

        self.dispatch(ctx, &metadata, builder).await
    }

    /// Send a bodyless request (GET, DELETE) and decode the response.
    pub async fn decode<T>(&self, ctx: &CallContext, method: Method, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.send(ctx, RequestDescriptor::new(method, path))
            .await?
            .parse_result()
    }

    /// Send a request with a JSON body (POST, PUT, PATCH) and decode the response.
    pub async fn decode_with_body<B, T>(
        &self,
        ctx: &CallContext,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = RequestDescriptor::new(method, path).json(body)?;
        self.send(ctx, request).await?.parse_result()
    }

    /// Send a request and discard any successful response body.
    pub async fn execute<B>(
        &self,
        ctx: &CallContext,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let mut request = RequestDescriptor::new(method, path);
        if let Some(body) = body {
            request = request.json(body)?;
        }
        self.send(ctx, request).await?.discard()
    }

    /// POST a JSON body without presenting the configured credential.
    ///
    /// Used for token exchange, which must not carry existing credentials.
    pub async fn send_unauthenticated<B, T>(
        &self,
        ctx: &CallContext,
        path: &str,
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.unauthenticated()
            .decode_with_body(ctx, Method::POST, path, body)
            .await
    }

    /// POST a single-part `multipart/form-data` upload and decode the response.
    ///
    /// The part body is streamed from the upload's reader.
    pub async fn send_multipart<R, T>(
        &self,
        ctx: &CallContext,
        upload: MultipartUpload<R>,
    ) -> Result<T>
    where
        R: AsyncRead + Send + Sync + 'static,
        T: DeserializeOwned,
    {
        let (path, field_name, reader, file_name) = upload.into_parts();
        let url = self.url(&path)?;

        let part = Part::stream(reqwest::Body::wrap_stream(ReaderStream::new(reader)))
            .file_name(file_name)
            .mime_str(OCTET_STREAM)
            .map_err(Error::Transport)?;
        let form = Form::new().part(field_name, part);

        let headers = self.default_headers();
        let metadata = RequestMetadata::new(Method::POST.as_str(), &path)
            .with_authentication(headers.contains_key(AUTHORIZATION));

        let builder = self
            .inner
            .http_client
            .post(url)
            .headers(headers)
            .multipart(form);

        self.dispatch(ctx, &metadata, builder)
            .await?
            .parse_result()
    }

    /// `User-Agent` and, when configured, `Authorization`.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.inner.user_agent.clone());
        if let Some(authorization) = &self.inner.authorization {
            headers.insert(AUTHORIZATION, authorization.clone());
        }
        headers
    }

    /// Absolute URL by plain concatenation of base URL and path.
    fn url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.inner.config.base_url, path);
        Url::parse(&raw).map_err(|e| Error::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })
    }

    /// Execute the request under `ctx` and read the whole body.
    async fn dispatch(
        &self,
        ctx: &CallContext,
        metadata: &RequestMetadata,
        builder: reqwest::RequestBuilder,
    ) -> Result<Response> {
        metadata.log_request();
        let timer = RequestTimer::start();

        let response = ctx
            .run(async move {
                let response = builder.send().await.map_err(Error::Transport)?;
                let status = response.status();
                let headers = response.headers().clone();
                let body = response.bytes().await.map_err(Error::Transport)?;
                Ok(Response::new(status, headers, body.to_vec(), timer.elapsed()))
            })
            .await?;

        ResponseMetadata::new(
            response.status().as_u16(),
            response.body().len(),
            response.elapsed(),
        )
        .log_response(metadata);

        Ok(response)
    }
}

fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.trim().is_empty() {
        return Err(Error::InvalidConfig("base URL is empty".to_string()));
    }

    let parsed = Url::parse(base_url)
        .map_err(|e| Error::InvalidConfig(format!("base URL '{base_url}' is invalid: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::InvalidConfig(format!(
            "base URL scheme '{other}' is not supported, use http or https"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn transport(credential: &str) -> Transport {
        let config = ClientConfig::builder()
            .credential(credential)
            .base_url("https://api.example.com/api")
            .build();
        Transport::new(config).unwrap()
    }

    #[test]
    fn test_url_is_plain_concatenation() {
        let t = transport("pk_1");
        assert_eq!(
            t.url("/v2/task/abc?include_subtasks=true").unwrap().as_str(),
            "https://api.example.com/api/v2/task/abc?include_subtasks=true"
        );
        // No slash normalization.
        assert_eq!(
            t.url("//v2/user").unwrap().as_str(),
            "https://api.example.com/api//v2/user"
        );
    }

    #[test]
    fn test_default_headers_with_credential() {
        let headers = transport("pk_verbatim").default_headers();
        assert_eq!(headers[AUTHORIZATION], "pk_verbatim");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert!(
            headers[USER_AGENT]
                .to_str()
                .unwrap()
                .starts_with("clickup-rs/")
        );
    }

    #[test]
    fn test_empty_credential_sends_no_authorization() {
        let t = transport("");
        assert!(!t.is_authenticated());
        assert!(!t.default_headers().contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_unauthenticated_clone_leaves_shared_transport_alone() {
        let t = transport("pk_shared");
        let anonymous = t.unauthenticated();

        assert!(!anonymous.is_authenticated());
        assert!(!anonymous.config().is_authenticated());
        assert!(t.is_authenticated());
        assert_eq!(anonymous.base_url(), t.base_url());
    }

    #[test]
    fn test_rejects_bad_base_urls() {
        for base_url in ["   ", "not a url", "ftp://files.example.com"] {
            let config = ClientConfig::builder().base_url(base_url).build();
            assert_matches!(Transport::new(config), Err(Error::InvalidConfig(_)), "{base_url}");
        }
    }

    #[test]
    fn test_rejects_credential_with_newline() {
        let config = ClientConfig::builder()
            .credential("pk_1\nInjected: yes")
            .build();
        let result = Transport::new(config);
        assert_matches!(result, Err(Error::InvalidHeaderValue(name)) if name == "authorization");
    }
}
