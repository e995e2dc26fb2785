use serde::{Deserialize, Serialize};

/// A panel administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// Login name.
    pub username: String,
    /// Sudo admins manage other admins, nodes and the core.
    #[serde(default)]
    pub is_sudo: bool,
    /// Linked Telegram id.
    #[serde(default)]
    pub telegram_id: Option<i64>,
    /// Discord webhook URL.
    #[serde(default)]
    pub discord_webhook: Option<String>,
    /// Traffic used by the admin's users, in bytes.
    #[serde(default)]
    pub users_usage: Option<u64>,
}

/// Body of `POST /api/admin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminCreate {
    /// Login name.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Grant sudo.
    pub is_sudo: bool,
    /// Linked Telegram id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,
    /// Discord webhook URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_webhook: Option<String>,
}

/// Body of `PUT /api/admin/{username}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminModify {
    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Grant or revoke sudo.
    pub is_sudo: bool,
    /// Linked Telegram id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,
    /// Discord webhook URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_webhook: Option<String>,
}

/// Query of `GET /api/admins`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminsQuery {
    /// Rows to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Maximum rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Username filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}
