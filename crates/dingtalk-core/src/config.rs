//! Configuration structures for the DingTalk transport.
//!
//! [`TransportConfig`] is serde-friendly so applications can embed it in their own
//! configuration files; every field except `base_url` has a default.

use crate::client::DEFAULT_REQUEST_TIMEOUT;
use crate::Error;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Public DingTalk open-platform endpoint.
pub const DEFAULT_BASE_URL: &str = "https://oapi.dingtalk.com/";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("dingtalk-core/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`HttpTransport`](crate::transport::HttpTransport).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransportConfig {
    /// Base URL every API path is resolved against
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Pre-acquired access token, appended to every request as `access_token`.
    ///
    /// Never serialized; set it with [`TransportConfig::with_access_token`].
    #[serde(skip)]
    pub access_token: Option<SecretString>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl TransportConfig {
    /// Create a configuration for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the URL is invalid, the same error
    /// [`HttpTransportBuilder::build`](crate::HttpTransportBuilder::build) reports for a
    /// config that fails its rules.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            ..Self::default()
        };

        config.validate()?;

        Ok(config)
    }

    /// Set the access token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::from(token.into()));
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse the base URL, normalising it to end with a slash so relative API paths
    /// join underneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        let mut raw = self.base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| Error::ConfigError(format!("Invalid base URL: {e}")))
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
