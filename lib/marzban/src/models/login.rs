use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/admin/token`.
#[derive(Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Admin username or client id.
    pub username: &'a str,
    /// Password or client secret.
    pub password: &'a str,
}

impl fmt::Debug for LoginRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Token returned by a successful login.
///
/// Accepts both `token` and the OAuth2-style `access_token` field name.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Bearer token.
    #[serde(alias = "access_token")]
    pub token: String,
    /// Token scheme, `bearer` when present.
    #[serde(default)]
    pub token_type: Option<String>,
    /// Account the token was issued for.
    #[serde(default)]
    pub user: Option<LoginUser>,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("user", &self.user)
            .finish()
    }
}

/// Account details that may accompany a login response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginUser {
    /// Account id.
    #[serde(default)]
    pub id: Option<u64>,
    /// Account username.
    pub username: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Whether the account is enabled.
    #[serde(default)]
    pub is_active: bool,
    /// Whether the account is a superuser.
    #[serde(default)]
    pub is_superuser: bool,
    /// Linked Telegram id.
    #[serde(default)]
    pub telegram_id: Option<i64>,
    /// Discord webhook URL.
    #[serde(default)]
    pub discord_webhook: Option<String>,
}
