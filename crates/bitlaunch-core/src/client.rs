//! HTTP transport, retry policy and client settings.
//!
//! [`ServiceClient`] is the single place that talks to the network. It joins
//! request paths onto the API base URL, attaches the bearer token and user
//! agent, retries transient failures within the [`RetryPolicy`] budget and
//! hands back the raw body of a `200 OK` response.

use crate::error::{Error, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://app.bitlaunch.io/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Default connect timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

// Connection pool settings

/// Default idle timeout for connection pools
pub const DEFAULT_POOL_IDLE_TIMEOUT: u64 = 90;

/// Default maximum idle connections per host
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

// Retry settings

/// Default maximum number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default initial retry delay in milliseconds
pub const DEFAULT_RETRY_DELAY_MS: u64 = 300;

/// Default maximum retry delay in milliseconds
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 900;

/// Retry policy with capped exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,

    /// Delay before the first retry
    pub initial_delay: Duration,

    /// Maximum delay between retries
    pub max_delay: Duration,

    /// Backoff multiplier
    pub backoff_multiplier: u32,

    /// Whether POST and PATCH requests are retried as well
    pub retry_non_idempotent: bool,
}

impl RetryPolicy {
    /// Create a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            initial_delay: Duration::from_millis(DEFAULT_RETRY_DELAY_MS),
            max_delay: Duration::from_millis(DEFAULT_RETRY_MAX_DELAY_MS),
            backoff_multiplier: 2,
            retry_non_idempotent: false,
        }
    }

    /// Create a retry policy with no retries.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_retries: 0,
            initial_delay: Duration::from_millis(0),
            max_delay: Duration::from_millis(0),
            backoff_multiplier: 1,
            retry_non_idempotent: false,
        }
    }

    /// Set the maximum number of retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the initial delay.
    #[must_use]
    pub const fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay.
    #[must_use]
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the backoff multiplier.
    #[must_use]
    pub const fn with_backoff_multiplier(mut self, multiplier: u32) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Also retry non-idempotent requests (POST, PATCH).
    ///
    /// A retried POST may be applied twice by the API, e.g. two servers
    /// created for one call.
    #[must_use]
    pub const fn with_retry_non_idempotent(mut self, enabled: bool) -> Self {
        self.retry_non_idempotent = enabled;
        self
    }

    /// Calculate delay for a given attempt number.
    ///
    /// delay = min(initial_delay * multiplier^(attempt - 1), max_delay)
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::from_secs(0);
        }

        let multiplier = self.backoff_multiplier.saturating_pow(attempt - 1);
        let initial_ms = u64::try_from(self.initial_delay.as_millis()).unwrap_or(u64::MAX);
        let delay_ms = initial_ms.saturating_mul(u64::from(multiplier));
        let delay = Duration::from_millis(delay_ms);

        std::cmp::min(delay, self.max_delay)
    }

    /// Check if retries are enabled.
    #[must_use]
    pub const fn has_retries(&self) -> bool {
        self.max_retries > 0
    }

    /// Total number of attempts allowed for a request with this method.
    #[must_use]
    pub fn attempts_for(&self, method: &Method) -> u32 {
        if method.is_idempotent() || self.retry_non_idempotent {
            self.max_retries.saturating_add(1)
        } else {
            1
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,

    /// TCP connect timeout
    pub connect_timeout: Duration,

    /// Retry policy
    pub retry_policy: RetryPolicy,

    /// Connection pool idle timeout
    pub pool_idle_timeout: Duration,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// Enable response compression
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT),
            retry_policy: RetryPolicy::new(),
            pool_idle_timeout: Duration::from_secs(DEFAULT_POOL_IDLE_TIMEOUT),
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
            enable_compression: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set retry policy.
    #[must_use]
    pub const fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Disable retries.
    #[must_use]
    pub const fn without_retries(mut self) -> Self {
        self.retry_policy = RetryPolicy::no_retry();
        self
    }

    /// Set connection pool idle timeout.
    #[must_use]
    pub const fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    #[must_use]
    pub const fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How the API token is presented in the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// `Bearer: <token>`, the form the BitLaunch API has always accepted.
    #[default]
    LegacyBearer,
    /// `Bearer <token>` as defined by RFC 6750.
    Bearer,
}

impl AuthScheme {
    fn header_value(self, token: &str) -> String {
        match self {
            Self::LegacyBearer => format!("Bearer: {token}"),
            Self::Bearer => format!("Bearer {token}"),
        }
    }
}

/// Builder for [`ServiceClient`].
#[derive(Debug, Clone)]
pub struct ServiceClientBuilder {
    base_url: Url,
    token: Arc<SecretString>,
    user_agent: String,
    auth_scheme: AuthScheme,
    http_config: ClientConfig,
    retry_policy: RetryPolicy,
}

impl ServiceClientBuilder {
    /// Create a builder for the given base URL and API token.
    ///
    /// A missing trailing slash is added so request paths join beneath the
    /// URL's path (`https://app.bitlaunch.io/api` + `user` →
    /// `https://app.bitlaunch.io/api/user`).
    pub fn new(base_url: impl AsRef<str>, token: impl Into<String>) -> Result<Self> {
        let mut url = Url::parse(base_url.as_ref()).map_err(|err| {
            Error::ConfigError(format!("Invalid base URL `{}`: {err}", base_url.as_ref()))
        })?;

        if url.cannot_be_a_base() {
            return Err(Error::ConfigError(format!(
                "Base URL `{url}` cannot carry request paths"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let http_config = ClientConfig::new();

        Ok(Self {
            base_url: url,
            token: Arc::new(SecretString::from(token.into())),
            user_agent: concat!("bitlaunch-core/", env!("CARGO_PKG_VERSION")).to_string(),
            auth_scheme: AuthScheme::default(),
            retry_policy: http_config.retry_policy,
            http_config,
        })
    }

    /// Set the `User-Agent` sent with every request.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Choose how the token is presented.
    #[must_use]
    pub fn with_auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    /// Override the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Override the HTTP client configuration, including its retry policy.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.retry_policy = config.retry_policy;
        self.http_config = config;
        self
    }

    /// Base URL requests will be joined onto.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the client.
    pub fn build(self) -> Result<ServiceClient> {
        let mut builder = ClientBuilder::new()
            .timeout(self.http_config.timeout)
            .connect_timeout(self.http_config.connect_timeout)
            .user_agent(self.user_agent)
            .pool_idle_timeout(self.http_config.pool_idle_timeout)
            .pool_max_idle_per_host(self.http_config.pool_max_idle_per_host);

        if !self.http_config.enable_compression {
            builder = builder.no_gzip();
        }

        let http = builder
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;

        Ok(ServiceClient {
            http,
            base_url: self.base_url,
            token: self.token,
            auth_scheme: self.auth_scheme,
            retry_policy: self.retry_policy,
        })
    }
}

/// Authenticated, retrying HTTP transport shared by every resource service.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: Client,
    base_url: Url,
    token: Arc<SecretString>,
    auth_scheme: AuthScheme,
    retry_policy: RetryPolicy,
}

impl ServiceClient {
    /// Base URL requests are joined onto.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Retry policy applied to every request.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    /// Issue a `GET` and decode the JSON body.
    pub async fn get_json<R>(&self, path: &[&str], params: &[(&'static str, String)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send_json(Method::GET, path, params, Option::<&()>::None)
            .await
    }

    /// Issue a request and decode the JSON body of the `200 OK` response.
    ///
    /// `path` lists the segments below the base URL. Each one is
    /// percent-encoded on its own, so an ID containing `/` or `?` stays a
    /// single segment.
    pub async fn send_json<B, R>(
        &self,
        method: Method,
        path: &[&str],
        params: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let text = self.execute(method, path, params, body).await?;
        serde_json::from_str(&text).map_err(|err| {
            Error::ParseError(format!(
                "Failed to parse response for `{}`: {err}",
                path.join("/")
            ))
        })
    }

    /// Issue a request whose `200 OK` body is ignored.
    ///
    /// The body is never decoded, so an empty response is fine.
    pub async fn send_empty<B>(
        &self,
        method: Method,
        path: &[&str],
        params: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, path, params, body).await.map(|_| ())
    }

    /// Issue a request within the retry budget and return the raw body.
    ///
    /// Only `200 OK` counts as success. Any other status becomes
    /// [`Error::Api`] unless it is retryable and attempts remain; once a
    /// retried request runs out of attempts the result is
    /// [`Error::RetriesExhausted`].
    pub async fn execute<B>(
        &self,
        method: Method,
        path: &[&str],
        params: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path)?;
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|err| {
                Error::InvalidRequest(format!(
                    "Failed to encode request body for `{}`: {err}",
                    url.path()
                ))
            })?;

        let max_attempts = self.retry_policy.attempts_for(&method);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let request =
                self.build_request(method.clone(), url.clone(), params, payload.as_deref());

            info!(%method, path = url.path(), attempt, "BitLaunch request");

            let error = match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status == StatusCode::OK {
                        return response.text().await.map_err(Error::from);
                    }

                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|err| format!("error reading response body: {err}"));
                    Error::Api {
                        status: status.as_u16(),
                        body,
                    }
                }
                Err(err) => Error::from(err),
            };

            if !error.is_retryable() || max_attempts == 1 {
                return Err(error);
            }

            if attempt >= max_attempts {
                warn!(
                    %method,
                    path = url.path(),
                    attempts = attempt,
                    "BitLaunch request retries exhausted"
                );
                return Err(Error::RetriesExhausted {
                    attempts: attempt,
                    last_error: describe_last_error(&error),
                });
            }

            let delay = self.retry_policy.delay_for_attempt(attempt);
            if delay > Duration::from_millis(0) {
                debug!("Retrying BitLaunch request after {:?}", delay);
                sleep(delay).await;
            }
        }
    }

    fn build_url(&self, path: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::InvalidEndpoint(format!(
                    "Base URL `{}` cannot carry request paths",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    fn build_request(
        &self,
        method: Method,
        url: Url,
        params: &[(&'static str, String)],
        payload: Option<&[u8]>,
    ) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, url)
            .query(params)
            .header(
                AUTHORIZATION,
                self.auth_scheme.header_value(self.token.expose_secret()),
            )
            .header(ACCEPT, "application/json");

        if let Some(bytes) = payload {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(bytes.to_vec());
        }

        request
    }
}

fn describe_last_error(error: &Error) -> String {
    match error {
        Error::Api { body, .. } => format!("{:?}", body.trim()),
        other => other.to_string(),
    }
}
