use tracing::debug;

use crate::models::{LoginRequest, LoginResponse};
use crate::{Endpoint, Error, HttpClient, MarzbanClient, RequestIntent, Result};

impl<C: HttpClient> MarzbanClient<C> {
    /// Logs in with an admin username and password and stores the token.
    ///
    /// Later authenticated calls on this client send `Authorization: Bearer
    /// <token>`. On failure the previous token, if any, is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] when the panel rejects the credentials, and
    /// [`Error::Semantic`] when it answers 200 without a token.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse> {
        let intent = RequestIntent::post(Endpoint::AdminToken)
            .anonymous()
            .json(&LoginRequest { username, password })?;

        let response: LoginResponse = self.fetch(intent).await?;
        if response.token.is_empty() {
            return Err(Error::semantic(
                "No token returned",
                "The login response did not contain a token.",
            ));
        }

        self.store_token(response.token.clone());
        debug!(username, "authenticated");

        Ok(response)
    }

    /// Logs in with the configured client-id/secret pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] when no pair was configured, otherwise
    /// as [`Self::login`].
    pub async fn login_with_client_credentials(&mut self) -> Result<LoginResponse> {
        let Some(credentials) = self.credentials().client_credentials().cloned() else {
            return Err(Error::invalid_request("no client credentials configured"));
        };

        self.login(credentials.client_id(), credentials.client_secret())
            .await
    }
}
