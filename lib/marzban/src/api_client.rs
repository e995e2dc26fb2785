//! The request pipeline.
//!
//! [`MarzbanClient`] combines a transport, the panel base URL, the client
//! configuration and the credentials. Every operation in [`crate::api`] is a
//! [`RequestIntent`] handed to [`MarzbanClient::fetch`] or one of its
//! siblings.

use std::fmt;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::Credentials;
use crate::config::{ClientConfig, ClientConfigBuilder, ClientOption};
use crate::{ContentType, Error, HttpClient, HyperClient, Request, RequestIntent, Response, Result};

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("marzban-rs/", env!("CARGO_PKG_VERSION"));

/// Typed client for the panel admin API.
///
/// Cloning is cheap for the default transport (the connection pool is
/// shared). Each clone carries its own copy of the credentials, so logging in
/// on one clone does not affect the others.
///
/// # Example
///
/// ```ignore
/// use marzban::MarzbanClient;
///
/// let mut client = MarzbanClient::new("https://panel.example.com")?;
/// client.login("admin", "secret").await?;
/// let alice = client.user("alice").await?;
/// ```
#[derive(Clone)]
pub struct MarzbanClient<C = HyperClient> {
    http: C,
    base_url: String,
    config: ClientConfig,
    credentials: Credentials,
}

impl<C> fmt::Debug for MarzbanClient<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarzbanClient")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl MarzbanClient<HyperClient> {
    /// Client with the default configuration and transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` does not parse.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    /// Builder for a client talking to `base_url`.
    #[must_use]
    pub fn builder(base_url: impl Into<String>) -> MarzbanClientBuilder<HyperClient> {
        MarzbanClientBuilder {
            base_url: base_url.into(),
            config: ClientConfig::builder(),
            transport: Box::new(|config: &ClientConfig| HyperClient::with_config(config.clone())),
        }
    }
}

impl<C> MarzbanClient<C> {
    /// Base URL as supplied, without normalization.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Current credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Current bearer token.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.credentials.token()
    }

    /// Whether a bearer token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    /// The transport.
    #[must_use]
    pub const fn http_client(&self) -> &C {
        &self.http
    }

    /// This client holding `token`, without a network call.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.credentials.set_token(token.into());
        self
    }

    pub(crate) fn store_token(&mut self, token: String) {
        self.credentials.set_token(token);
    }

    /// Builds the wire request for `intent`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if base URL and path do not form a URL.
    pub fn build_request(&self, intent: &RequestIntent<'_>) -> Result<Request<Bytes>> {
        let endpoint = intent.endpoint();
        let url = Url::parse(&format!("{}{}", self.base_url, endpoint.path()))?;

        let mut builder = Request::builder(intent.method(), url)
            .query_pairs(intent.query_pairs().iter().cloned())
            .header("accept", ContentType::Json.as_str())
            .header("user-agent", USER_AGENT)
            .extension(endpoint.template());

        if intent.is_authenticated()
            && let Some(bearer) = self.credentials.bearer()
        {
            builder = builder.header("authorization", bearer);
        }

        builder = builder.headers(
            intent
                .headers()
                .iter()
                .map(|(name, value)| (name.to_ascii_lowercase(), value.clone())),
        );

        if let Some((content_type, body)) = intent.body() {
            builder = builder
                .header("content-type", content_type.as_str())
                .body(body.clone());
        }

        Ok(builder.build())
    }
}

impl<C: HttpClient> MarzbanClient<C> {
    /// Sends `intent` and returns the response if its status is 200.
    ///
    /// # Errors
    ///
    /// - transport failures ([`Error::Connection`], [`Error::Tls`], [`Error::Timeout`])
    ///   unmodified,
    /// - [`Error::Http`] for any other status, carrying the raw body.
    pub async fn execute(&self, intent: RequestIntent<'_>) -> Result<Response<Bytes>> {
        let request = self.build_request(&intent)?;
        let method = intent.method();
        let template = intent.endpoint().template();

        debug!(%method, endpoint = %template, "sending request");

        let response = tokio::time::timeout(self.config.timeout, self.http.execute(request))
            .await
            .map_err(|_| Error::Timeout)??;

        debug!(%method, endpoint = %template, status = response.status(), "received response");

        if !response.is_ok() {
            let (status, _, body) = response.into_parts();
            return Err(Error::http(status, body));
        }

        Ok(response)
    }

    /// [`Self::execute`] then decode the JSON body as `T`.
    ///
    /// # Errors
    ///
    /// As [`Self::execute`], plus [`Error::JsonDeserialization`] when the
    /// body does not match `T`.
    pub async fn fetch<T: DeserializeOwned>(&self, intent: RequestIntent<'_>) -> Result<T> {
        let response = self.execute(intent).await?;
        response.json()
    }

    /// [`Self::execute`], ignoring the body.
    ///
    /// # Errors
    ///
    /// As [`Self::execute`].
    pub async fn fetch_unit(&self, intent: RequestIntent<'_>) -> Result<()> {
        self.execute(intent).await.map(drop)
    }

    /// [`Self::execute`] then read the body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// As [`Self::execute`], plus [`Error::InvalidBody`] for non UTF-8 bodies.
    pub async fn fetch_text(&self, intent: RequestIntent<'_>) -> Result<String> {
        self.execute(intent).await?.text()
    }
}

type TransportFactory<C> = Box<dyn FnOnce(&ClientConfig) -> C + Send>;

/// Builder for [`MarzbanClient`].
///
/// Options are applied in call order over the defaults.
///
/// ```ignore
/// use std::time::Duration;
/// use marzban::MarzbanClient;
///
/// let client = MarzbanClient::builder("https://panel.example.com")
///     .timeout(Duration::from_secs(10))
///     .client_credentials("bot", "secret")
///     .build()?;
/// ```
pub struct MarzbanClientBuilder<C = HyperClient> {
    base_url: String,
    config: ClientConfigBuilder,
    transport: TransportFactory<C>,
}

impl<C> fmt::Debug for MarzbanClientBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarzbanClientBuilder")
            .field("base_url", &self.base_url)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<C> MarzbanClientBuilder<C> {
    /// Appends a configuration option.
    #[must_use]
    pub fn option(mut self, option: ClientOption) -> Self {
        self.config = self.config.option(option);
        self
    }

    /// Overrides the 30 second timeout.
    #[must_use]
    pub fn timeout(self, timeout: std::time::Duration) -> Self {
        self.option(ClientOption::Timeout(timeout))
    }

    /// Sets the pair used by [`MarzbanClient::login_with_client_credentials`].
    #[must_use]
    pub fn client_credentials(
        self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.option(ClientOption::ClientCredentials(
            crate::ClientCredentials::new(client_id, client_secret),
        ))
    }

    /// Sets a pre-known bearer token.
    #[must_use]
    pub fn token(self, token: impl Into<String>) -> Self {
        self.option(ClientOption::Token(token.into()))
    }

    /// Overrides the idle connections kept per host.
    #[must_use]
    pub fn pool_idle_per_host(self, count: usize) -> Self {
        self.option(ClientOption::PoolIdlePerHost(count))
    }

    /// Overrides the idle connection timeout.
    #[must_use]
    pub fn pool_idle_timeout(self, timeout: std::time::Duration) -> Self {
        self.option(ClientOption::PoolIdleTimeout(timeout))
    }

    /// Enables or disables response compression on the default transport.
    #[must_use]
    pub fn compression(self, enabled: bool) -> Self {
        self.option(ClientOption::Compression(enabled))
    }

    /// Replaces the default transport.
    #[must_use]
    pub fn http_client<D>(self, client: D) -> MarzbanClientBuilder<D>
    where
        D: Send + 'static,
    {
        MarzbanClientBuilder {
            base_url: self.base_url,
            config: self.config,
            transport: Box::new(move |_: &ClientConfig| client),
        }
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the base URL does not parse.
    pub fn build(self) -> Result<MarzbanClient<C>> {
        Url::parse(&self.base_url)?;

        let config = self.config.build();
        let credentials = Credentials::new(config.token.clone(), config.client_credentials.clone());
        let http = (self.transport)(&config);

        Ok(MarzbanClient {
            http,
            base_url: self.base_url,
            config,
            credentials,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use assert2::{check, let_assert};

    use super::*;
    use crate::{Endpoint, Method};

    fn client() -> MarzbanClient {
        MarzbanClient::new("http://panel.local:8000").expect("client")
    }

    #[test]
    fn builder_applies_options_in_order() {
        let client = MarzbanClient::builder("http://panel.local")
            .timeout(Duration::from_secs(3))
            .token("first")
            .token("second")
            .build()
            .expect("client");

        check!(client.config().timeout == Duration::from_secs(3));
        check!(client.token() == Some("second"));
        check!(client.http_client().config().timeout == Duration::from_secs(3));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let_assert!(Err(Error::InvalidUrl(_)) = MarzbanClient::new("not a url"));
    }

    #[test]
    fn base_url_is_kept_verbatim() {
        let client = MarzbanClient::new("http://panel.local/").expect("client");
        check!(client.base_url() == "http://panel.local/");
    }

    #[test]
    fn request_for_authenticated_intent() {
        let client = client().with_token("abc123");
        let intent = RequestIntent::get(Endpoint::UserByUsername { username: "alice" });

        let request = client.build_request(&intent).expect("request");

        check!(request.method() == Method::Get);
        check!(request.url().as_str() == "http://panel.local:8000/api/user/alice");
        check!(request.header("Authorization") == Some("Bearer abc123"));
        check!(request.header("Accept") == Some("application/json"));
        check!(request.header("User-Agent") == Some(USER_AGENT));
        check!(request.header("Content-Type").is_none());
        check!(
            request.extensions().get::<crate::PathTemplate>().map(crate::PathTemplate::as_str)
                == Some("/api/user/{username}")
        );
    }

    #[test]
    fn anonymous_intent_has_no_authorization() {
        let client = client().with_token("abc123");
        let intent = RequestIntent::post(Endpoint::AdminToken).anonymous();

        let request = client.build_request(&intent).expect("request");
        check!(request.header("Authorization").is_none());
    }

    #[test]
    fn body_sets_content_type() {
        let intent = RequestIntent::post(Endpoint::User)
            .json(&serde_json::json!({"username": "alice"}))
            .expect("json");

        let request = client().build_request(&intent).expect("request");
        check!(request.header("Content-Type") == Some("application/json"));
        check!(request.body().map(Bytes::as_ref) == Some(br#"{"username":"alice"}"#.as_slice()));
    }

    #[test]
    fn intent_headers_override_defaults() {
        let intent = RequestIntent::get(Endpoint::Subscription { token: "tok" })
            .anonymous()
            .header("User-Agent", "clash-meta");

        let request = client().build_request(&intent).expect("request");
        check!(request.header("user-agent") == Some("clash-meta"));
        check!(request.headers().len() == 2);
    }

    #[test]
    fn query_pairs_are_encoded() {
        let intent = RequestIntent::get(Endpoint::Users).query_pair("search", "a b");
        let request = client().build_request(&intent).expect("request");
        check!(request.url().query() == Some("search=a+b"));
    }

    #[test]
    fn clones_hold_independent_credentials() {
        let original = client();
        let authenticated = original.clone().with_token("abc123");

        check!(!original.is_authenticated());
        check!(authenticated.token() == Some("abc123"));
    }

    #[test]
    fn debug_hides_token() {
        let client = client().with_token("abc123");
        check!(!format!("{client:?}").contains("abc123"));
    }
}
