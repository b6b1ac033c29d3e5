//! Asynchronous BitLaunch client.

use crate::services::{
    AccountService, CreateOptionsService, ServerService, SshKeyService, TransactionService,
};
use crate::Result;
use bitlaunch_core::client::{
    AuthScheme, ClientConfig, RetryPolicy, ServiceClient, ServiceClientBuilder, DEFAULT_BASE_URL,
};
use bitlaunch_core::BitLaunchConfig;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("bitlaunch/", env!("CARGO_PKG_VERSION"));

/// Builder for [`BitLaunchClient`].
#[derive(Debug, Clone)]
pub struct BitLaunchClientBuilder {
    inner: ServiceClientBuilder,
}

impl BitLaunchClientBuilder {
    /// Create a builder for the production API.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Create a builder for a different API base URL.
    pub fn with_base_url(base_url: impl AsRef<str>, token: impl Into<String>) -> Result<Self> {
        let builder = ServiceClientBuilder::new(base_url, token)?.with_user_agent(USER_AGENT);
        Ok(Self { inner: builder })
    }

    /// Create a builder from validated settings.
    pub fn from_config(token: impl Into<String>, config: &BitLaunchConfig) -> Result<Self> {
        let builder = config.service_builder(token)?.with_user_agent(USER_AGENT);
        Ok(Self { inner: builder })
    }

    /// Override the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.inner = self.inner.with_retry_policy(retry);
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.inner = self.inner.with_http_config(config);
        self
    }

    /// Choose how the token is presented in the `Authorization` header.
    #[must_use]
    pub fn with_auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.inner = self.inner.with_auth_scheme(scheme);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<BitLaunchClient> {
        debug!(base_url = %self.inner.base_url(), "building BitLaunch client");
        let inner = self.inner.build()?;
        Ok(BitLaunchClient { inner })
    }
}

/// Asynchronous BitLaunch client.
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct BitLaunchClient {
    inner: ServiceClient,
}

impl BitLaunchClient {
    /// Construct a client for the production API with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        BitLaunchClientBuilder::new(token)?.build()
    }

    /// Start configuring a client.
    pub fn builder(token: impl Into<String>) -> Result<BitLaunchClientBuilder> {
        BitLaunchClientBuilder::new(token)
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    /// Account details, usage and activity history.
    #[must_use]
    pub fn account(&self) -> AccountService<'_> {
        AccountService::new(&self.inner)
    }

    /// Server lifecycle.
    #[must_use]
    pub fn servers(&self) -> ServerService<'_> {
        ServerService::new(&self.inner)
    }

    /// SSH key management.
    #[must_use]
    pub fn ssh_keys(&self) -> SshKeyService<'_> {
        SshKeyService::new(&self.inner)
    }

    /// Billing transactions.
    #[must_use]
    pub fn transactions(&self) -> TransactionService<'_> {
        TransactionService::new(&self.inner)
    }

    /// Catalogue of images, regions and sizes per host.
    #[must_use]
    pub fn create_options(&self) -> CreateOptionsService<'_> {
        CreateOptionsService::new(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn default_client_targets_production() {
        let client = BitLaunchClient::new("token").unwrap();
        assert_eq!(client.base_url().as_str(), "https://app.bitlaunch.io/api/");
    }

    #[test]
    fn from_config_rejects_invalid_settings() {
        let config = BitLaunchConfig {
            max_retries: 99,
            ..BitLaunchConfig::default()
        };
        assert!(BitLaunchClientBuilder::from_config("token", &config).is_err());
    }

    #[tokio::test]
    async fn sends_crate_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("User-Agent", USER_AGENT))
            .and(header("Authorization", "Bearer: token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = BitLaunchClientBuilder::with_base_url(server.uri(), "token")
            .unwrap()
            .build()
            .unwrap();
        let account = client.account().show().await.unwrap();
        assert_eq!(account.id, "u-1");
    }

    #[tokio::test]
    async fn from_config_honours_auth_scheme() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("Authorization", "Bearer token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "u-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let config = BitLaunchConfig::new(server.uri())
            .unwrap()
            .with_auth_scheme(AuthScheme::Bearer);
        let client = BitLaunchClientBuilder::from_config("token", &config)
            .unwrap()
            .build()
            .unwrap();
        client.account().show().await.unwrap();
    }
}
