use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A reusable user preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTemplate {
    /// Template id.
    pub id: u64,
    /// Template name.
    #[serde(default)]
    pub name: Option<String>,
    /// Data limit in bytes, `0` for unlimited.
    #[serde(default)]
    pub data_limit: Option<u64>,
    /// Lifetime in seconds, `0` for unlimited.
    #[serde(default)]
    pub expire_duration: Option<u64>,
    /// Prefix applied to usernames created from the template.
    #[serde(default)]
    pub username_prefix: Option<String>,
    /// Suffix applied to usernames created from the template.
    #[serde(default)]
    pub username_suffix: Option<String>,
    /// Protocol to inbound tags.
    #[serde(default)]
    pub inbounds: BTreeMap<String, Vec<String>>,
}

/// Body of `POST /api/user_template` and `PUT /api/user_template/{template_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserTemplateRequest {
    /// Template name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Data limit in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_limit: Option<u64>,
    /// Lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_duration: Option<u64>,
    /// Username prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_prefix: Option<String>,
    /// Username suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_suffix: Option<String>,
    /// Protocol to inbound tags.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub inbounds: BTreeMap<String, Vec<String>>,
}

/// Query of `GET /api/user_template`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserTemplatesQuery {
    /// Rows to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Maximum rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
