//! Connection settings for BitLaunch clients.
//!
//! [`BitLaunchConfig`] is the deserializable form of everything a client
//! needs except the API token, which embedding applications supply
//! separately so it never ends up in a settings file by accident.

use crate::client::{
    AuthScheme, ClientConfig, RetryPolicy, ServiceClientBuilder, DEFAULT_BASE_URL,
};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::{Validate, ValidationError};

/// Validated connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_retry_window"))]
pub struct BitLaunchConfig {
    /// API base URL
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How the token is presented in the `Authorization` header
    #[serde(default)]
    pub auth_scheme: AuthScheme,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of retries after the first attempt
    #[validate(range(min = 0, max = 10))]
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    #[serde(default = "default_retry_initial_delay_ms")]
    pub retry_initial_delay_ms: u64,

    /// Upper bound on the delay between retries, in milliseconds
    #[validate(range(max = 60_000))]
    #[serde(default = "default_retry_max_delay_ms")]
    pub retry_max_delay_ms: u64,

    /// Retry POST requests too
    #[serde(default)]
    pub retry_non_idempotent: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    crate::client::DEFAULT_TIMEOUT
}

const fn default_max_retries() -> u32 {
    crate::client::DEFAULT_MAX_RETRIES
}

const fn default_retry_initial_delay_ms() -> u64 {
    crate::client::DEFAULT_RETRY_DELAY_MS
}

const fn default_retry_max_delay_ms() -> u64 {
    crate::client::DEFAULT_RETRY_MAX_DELAY_MS
}

fn validate_retry_window(config: &BitLaunchConfig) -> Result<(), ValidationError> {
    if config.retry_initial_delay_ms > config.retry_max_delay_ms {
        let mut err = ValidationError::new("retry_window");
        err.message = Some("retry_initial_delay_ms must not exceed retry_max_delay_ms".into());
        return Err(err);
    }
    Ok(())
}

impl BitLaunchConfig {
    /// Create a configuration for the given base URL with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            ..Self::default()
        };

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Parse a JSON settings document and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration document: {e}")))?;

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set the authorization scheme.
    #[must_use]
    pub const fn with_auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set maximum retry attempts.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::ConfigError(format!("Invalid base URL: {e}")))
    }

    /// Retry policy described by these settings.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new()
            .with_max_retries(self.max_retries)
            .with_initial_delay(Duration::from_millis(self.retry_initial_delay_ms))
            .with_max_delay(Duration::from_millis(self.retry_max_delay_ms))
            .with_retry_non_idempotent(self.retry_non_idempotent)
    }

    /// HTTP client settings described by these settings.
    #[must_use]
    pub const fn http_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_timeout(self.timeout())
            .with_retry_policy(self.retry_policy())
    }

    /// Validate and turn the settings into a transport builder.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the base URL is unusable.
    pub fn service_builder(&self, token: impl Into<String>) -> Result<ServiceClientBuilder, Error> {
        self.validate()?;

        Ok(ServiceClientBuilder::new(&self.base_url, token)?
            .with_auth_scheme(self.auth_scheme)
            .with_http_config(self.http_config()))
    }
}

impl Default for BitLaunchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_scheme: AuthScheme::default(),
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
            retry_initial_delay_ms: default_retry_initial_delay_ms(),
            retry_max_delay_ms: default_retry_max_delay_ms(),
            retry_non_idempotent: false,
        }
    }
}
