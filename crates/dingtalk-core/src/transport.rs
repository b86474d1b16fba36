//! Transport seam for DingTalk API clients.
//!
//! API clients only ever see [`Transport`]: a keyed GET and a JSON POST, both returning
//! the decoded response body. [`HttpTransport`] is the reqwest-backed implementation;
//! applications with their own token management can supply a different one.

use crate::client::ClientConfig;
use crate::config::TransportConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;
use validator::Validate;

/// The two primitives every directory operation is expressed in.
///
/// Implementations own authentication and decoding. Failures are returned as-is to the
/// caller of the API client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET against `path` with the given query parameters.
    async fn get(&self, path: &str, params: &[(&'static str, String)]) -> Result<Value>;

    /// Issue a POST against `path` with `body` encoded as JSON.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value>;
}

/// Builder for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    config: TransportConfig,
    http_config: ClientConfig,
}

impl HttpTransportBuilder {
    /// Create a builder for the specified base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the URL is invalid.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self::from_config(TransportConfig::new(base_url.as_ref())?))
    }

    /// Create a builder from an existing configuration.
    #[must_use]
    pub fn from_config(config: TransportConfig) -> Self {
        let http_config = ClientConfig::new().with_timeout(config.timeout());
        Self {
            config,
            http_config,
        }
    }

    /// Configure the access token appended to every request.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.config = self.config.with_access_token(token);
        self
    }

    /// Override the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.with_user_agent(user_agent);
        self
    }

    /// Set the request timeout in seconds. Checked against the configured range in
    /// [`build`](Self::build).
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config = self.config.with_timeout(seconds);
        self
    }

    /// Override the HTTP client configuration.
    ///
    /// Pool and compression settings are taken from `config`. Its `timeout` is not: the
    /// request timeout always comes from the validated
    /// [`TransportConfig::request_timeout_secs`]; use [`with_timeout`](Self::with_timeout)
    /// to change it.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.http_config = config;
        self
    }

    fn effective_http_config(&self) -> ClientConfig {
        self.http_config.clone().with_timeout(self.config.timeout())
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or the HTTP client cannot
    /// be constructed.
    pub fn build(self) -> Result<HttpTransport> {
        self.config.validate()?;
        let base_url = self.config.parse_base_url()?;
        let http = self
            .effective_http_config()
            .build_http_client(&self.config.user_agent)?;

        Ok(HttpTransport {
            http,
            base_url,
            access_token: self.config.access_token,
        })
    }
}

/// reqwest-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
    access_token: Option<SecretString>,
}

impl HttpTransport {
    /// Construct a transport directly from the base URL, without an access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        HttpTransportBuilder::new(base_url)?.build()
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if let Some(token) = &self.access_token {
            url.query_pairs_mut()
                .append_pair("access_token", token.expose_secret());
        }
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Value> {
        let response = request.header(ACCEPT, "application/json").send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let err = map_status_to_error(status, text);
            if err.should_log() {
                warn!(path, %status, error = %err, "DingTalk request failed");
            } else {
                debug!(path, %status, error = %err, "DingTalk request rejected");
            }
            return Err(err);
        }

        serde_json::from_str(&text).map_err(Error::from)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: &[(&'static str, String)]) -> Result<Value> {
        debug!(method = "GET", path, params = params.len(), "dispatching DingTalk request");
        let url = self.endpoint(path)?;
        let mut request = self.http.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }
        self.send(request, path).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        debug!(method = "POST", path, "dispatching DingTalk request");
        let url = self.endpoint(path)?;
        self.send(self.http.post(url).json(body), path).await
    }
}

fn map_status_to_error(status: StatusCode, text: String) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::NotFound(text),
        StatusCode::BAD_REQUEST => Error::BadRequest(text),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::Unauthorized(format!("DingTalk authentication failed: {text}"))
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            Error::Timeout(format!("DingTalk request timed out: {text}"))
        }
        StatusCode::TOO_MANY_REQUESTS
        | StatusCode::BAD_GATEWAY
        | StatusCode::SERVICE_UNAVAILABLE => {
            Error::ServiceUnavailable(format!("DingTalk temporarily unavailable: {text}"))
        }
        status if status.is_server_error() => {
            Error::ServiceUnavailable(format!("DingTalk server error {status}: {text}"))
        }
        _ => Error::HttpError(format!("DingTalk error {status}: {text}")),
    }
}
