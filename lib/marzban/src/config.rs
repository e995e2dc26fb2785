//! Client configuration types.
//!
//! A [`ClientConfig`] is built once from an ordered list of [`ClientOption`]s
//! applied over the defaults. A later option overrides an earlier one.

use std::fmt;
use std::time::Duration;

use crate::auth::ClientCredentials;

/// Configuration for the client and its default transport.
#[derive(Clone)]
pub struct ClientConfig {
    /// Timeout for one request/response exchange.
    pub timeout: Duration,
    /// Maximum idle connections kept per host.
    ///
    /// hyper-util only caps idle connections per host, not in total. A client
    /// talks to a single panel host, so in practice this is the overall cap.
    pub pool_idle_per_host: usize,
    /// Idle connection timeout.
    pub pool_idle_timeout: Duration,
    /// Whether responses may be compressed (`Accept-Encoding` + decompression).
    pub compression: bool,
    /// Pre-known bearer token; skips the login step.
    pub token: Option<String>,
    /// Client-id/secret pair for [`crate::MarzbanClient::login_with_client_credentials`].
    pub client_credentials: Option<ClientCredentials>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            pool_idle_per_host: 10,
            pool_idle_timeout: Duration::from_secs(30),
            compression: true,
            token: None,
            client_credentials: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("timeout", &self.timeout)
            .field("pool_idle_per_host", &self.pool_idle_per_host)
            .field("pool_idle_timeout", &self.pool_idle_timeout)
            .field("compression", &self.compression)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("client_credentials", &self.client_credentials)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// A single configuration override.
#[derive(Debug, Clone)]
pub enum ClientOption {
    /// Overrides the 30 second timeout.
    Timeout(Duration),
    /// Sets the pair used by the credential-grant login.
    ClientCredentials(ClientCredentials),
    /// Sets a pre-known bearer token.
    Token(String),
    /// Overrides the idle connections kept per host.
    PoolIdlePerHost(usize),
    /// Overrides the idle connection timeout.
    PoolIdleTimeout(Duration),
    /// Enables or disables response compression.
    Compression(bool),
}

impl ClientOption {
    /// Applies this option to `config`.
    pub fn apply(self, config: &mut ClientConfig) {
        match self {
            Self::Timeout(timeout) => config.timeout = timeout,
            Self::ClientCredentials(credentials) => {
                config.client_credentials = Some(credentials);
            }
            Self::Token(token) => config.token = Some(token),
            Self::PoolIdlePerHost(count) => config.pool_idle_per_host = count,
            Self::PoolIdleTimeout(timeout) => config.pool_idle_timeout = timeout,
            Self::Compression(enabled) => config.compression = enabled,
        }
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    options: Vec<ClientOption>,
}

impl ClientConfigBuilder {
    /// Appends an option.
    #[must_use]
    pub fn option(mut self, option: ClientOption) -> Self {
        self.options.push(option);
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(self, timeout: Duration) -> Self {
        self.option(ClientOption::Timeout(timeout))
    }

    /// Set the client-id/secret pair.
    #[must_use]
    pub fn client_credentials(
        self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.option(ClientOption::ClientCredentials(ClientCredentials::new(
            client_id,
            client_secret,
        )))
    }

    /// Set a pre-known bearer token.
    #[must_use]
    pub fn token(self, token: impl Into<String>) -> Self {
        self.option(ClientOption::Token(token.into()))
    }

    /// Set the maximum idle connections per host.
    #[must_use]
    pub fn pool_idle_per_host(self, count: usize) -> Self {
        self.option(ClientOption::PoolIdlePerHost(count))
    }

    /// Set the idle connection timeout.
    #[must_use]
    pub fn pool_idle_timeout(self, timeout: Duration) -> Self {
        self.option(ClientOption::PoolIdleTimeout(timeout))
    }

    /// Enable or disable response compression.
    #[must_use]
    pub fn compression(self, enabled: bool) -> Self {
        self.option(ClientOption::Compression(enabled))
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        self.options
            .into_iter()
            .fold(ClientConfig::default(), |mut config, option| {
                option.apply(&mut config);
                config
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.pool_idle_per_host, 10);
        assert_eq!(config.pool_idle_timeout, Duration::from_secs(30));
        assert!(config.compression);
        assert!(config.token.is_none());
        assert!(config.client_credentials.is_none());
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::builder()
            .timeout(Duration::from_secs(5))
            .client_credentials("bot", "secret")
            .pool_idle_per_host(2)
            .compression(false)
            .build();

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.pool_idle_per_host, 2);
        assert!(!config.compression);
        assert_eq!(
            config.client_credentials,
            Some(ClientCredentials::new("bot", "secret"))
        );
    }

    #[test]
    fn later_options_win() {
        let config = ClientConfig::builder()
            .timeout(Duration::from_secs(5))
            .token("first")
            .timeout(Duration::from_secs(7))
            .token("second")
            .build();

        assert_eq!(config.timeout, Duration::from_secs(7));
        assert_eq!(config.token.as_deref(), Some("second"));
    }

    #[test]
    fn debug_redacts_token() {
        let config = ClientConfig::builder().token("abc123").build();
        let debug = format!("{config:?}");
        assert!(!debug.contains("abc123"));
    }
}
