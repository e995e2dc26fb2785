use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Admin;

/// Lifecycle state of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Can connect.
    Active,
    /// Disabled by an admin.
    Disabled,
    /// Data limit reached.
    Limited,
    /// Expiry passed.
    Expired,
    /// Waiting for the first connection before the expiry clock starts.
    OnHold,
}

/// How often the used traffic resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataLimitResetStrategy {
    /// Never.
    #[default]
    NoReset,
    /// Daily.
    Day,
    /// Weekly.
    Week,
    /// Monthly.
    Month,
    /// Yearly.
    Year,
}

/// Plan applied when the current one runs out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextPlan {
    /// Data limit of the next plan, bytes.
    #[serde(default)]
    pub data_limit: Option<u64>,
    /// Expiry of the next plan, UNIX seconds.
    #[serde(default)]
    pub expire: Option<i64>,
    /// Carry unused traffic over.
    #[serde(default)]
    pub add_remaining_traffic: bool,
    /// Switch when either limit is hit rather than both.
    #[serde(default = "default_true")]
    pub fire_on_either: bool,
}

const fn default_true() -> bool {
    true
}

/// A proxy user as returned by the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Login name.
    pub username: String,
    /// Lifecycle state.
    pub status: UserStatus,
    /// Bytes used in the current period.
    #[serde(default)]
    pub used_traffic: u64,
    /// Bytes used since creation.
    #[serde(default)]
    pub lifetime_used_traffic: Option<u64>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Expiry, UNIX seconds; `None` or `0` for never.
    #[serde(default)]
    pub expire: Option<i64>,
    /// Data limit in bytes; `None` or `0` for unlimited.
    #[serde(default)]
    pub data_limit: Option<u64>,
    /// Reset period of `used_traffic`.
    #[serde(default)]
    pub data_limit_reset_strategy: Option<DataLimitResetStrategy>,
    /// Protocol to protocol-specific settings (ids, passwords, flows).
    #[serde(default)]
    pub proxies: BTreeMap<String, Value>,
    /// Protocol to enabled inbound tags.
    #[serde(default)]
    pub inbounds: BTreeMap<String, Vec<String>>,
    /// Protocol to excluded inbound tags.
    #[serde(default)]
    pub excluded_inbounds: BTreeMap<String, Vec<String>>,
    /// Free-form note.
    #[serde(default)]
    pub note: Option<String>,
    /// Last subscription fetch.
    #[serde(default)]
    pub sub_updated_at: Option<String>,
    /// User agent of the last subscription fetch.
    #[serde(default)]
    pub sub_last_user_agent: Option<String>,
    /// Last time the user was online.
    #[serde(default)]
    pub online_at: Option<String>,
    /// On-hold lifetime in seconds.
    #[serde(default)]
    pub on_hold_expire_duration: Option<i64>,
    /// Deadline for leaving the on-hold state.
    #[serde(default)]
    pub on_hold_timeout: Option<String>,
    /// Days after expiry before the panel deletes the user.
    #[serde(default)]
    pub auto_delete_in_days: Option<i64>,
    /// Subscription URL, empty when the panel has none for this user.
    #[serde(default)]
    pub subscription_url: String,
    /// Share links.
    #[serde(default)]
    pub links: Vec<String>,
    /// Owning admin.
    #[serde(default)]
    pub admin: Option<Admin>,
    /// Next plan.
    #[serde(default)]
    pub next_plan: Option<NextPlan>,
}

impl User {
    /// Enabled inbound tags across all protocols, protocol by protocol.
    #[must_use]
    pub fn inbound_tags(&self) -> Vec<String> {
        self.inbounds.values().flatten().cloned().collect()
    }
}

/// Body of `POST /api/user`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserCreate {
    /// Login name, 3 to 32 characters of `a-z`, `0-9` and `_`.
    pub username: String,
    /// Protocol to settings; `{}` lets the panel generate credentials.
    pub proxies: BTreeMap<String, Value>,
    /// Protocol to inbound tags; empty enables every inbound.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub inbounds: BTreeMap<String, Vec<String>>,
    /// Expiry, UNIX seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<i64>,
    /// Data limit in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_limit: Option<u64>,
    /// Reset period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_limit_reset_strategy: Option<DataLimitResetStrategy>,
    /// Initial status, `active` or `on_hold`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Deadline for leaving the on-hold state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_hold_timeout: Option<String>,
    /// On-hold lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_hold_expire_duration: Option<i64>,
    /// Next plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_plan: Option<NextPlan>,
}

impl UserCreate {
    /// User with the given protocols enabled and panel defaults for the rest.
    #[must_use]
    pub fn new<I, P>(username: impl Into<String>, protocols: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            username: username.into(),
            proxies: protocols
                .into_iter()
                .map(|protocol| (protocol.into(), Value::Object(serde_json::Map::new())))
                .collect(),
            inbounds: BTreeMap::new(),
            expire: None,
            data_limit: None,
            data_limit_reset_strategy: None,
            status: None,
            note: None,
            on_hold_timeout: None,
            on_hold_expire_duration: None,
            next_plan: None,
        }
    }
}

/// Body of `PUT /api/user/{username}`; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserModify {
    /// Protocol settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxies: Option<BTreeMap<String, Value>>,
    /// Protocol to inbound tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbounds: Option<BTreeMap<String, Vec<String>>>,
    /// Expiry, UNIX seconds; `0` clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<i64>,
    /// Data limit in bytes; `0` clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_limit: Option<u64>,
    /// Reset period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_limit_reset_strategy: Option<DataLimitResetStrategy>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Deadline for leaving the on-hold state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_hold_timeout: Option<String>,
    /// On-hold lifetime in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_hold_expire_duration: Option<i64>,
    /// Next plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_plan: Option<NextPlan>,
}

/// Query of `GET /api/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsersQuery {
    /// Rows to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Maximum rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Exact usernames, repeated.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub username: Vec<String>,
    /// Substring match on username and note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Owning admins, repeated.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub admin: Vec<String>,
    /// Status filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// Sort key, e.g. `-created_at`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// Response of `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    /// The requested page.
    pub users: Vec<User>,
    /// Matches before paging.
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn user_decodes_minimal_payload() {
        let user: User =
            serde_json::from_str(r#"{"username":"alice","status":"on_hold","unknown":true}"#)
                .expect("decode");

        check!(user.status == UserStatus::OnHold);
        check!(user.subscription_url.is_empty());
        check!(user.inbounds.is_empty());
        check!(user.admin.is_none());
    }

    #[test]
    fn inbound_tags_are_flattened_in_protocol_order() {
        let user: User = serde_json::from_str(
            r#"{"username":"alice","status":"active","inbounds":{"vmess":["VMess TCP"],"vless":["VLESS TCP REALITY","VLESS WS"]}}"#,
        )
        .expect("decode");

        check!(user.inbound_tags() == ["VLESS TCP REALITY", "VLESS WS", "VMess TCP"]);
    }

    #[test]
    fn create_skips_unset_fields() {
        let mut create = UserCreate::new("alice", ["vless"]);
        create.data_limit = Some(1_073_741_824);

        let json = serde_json::to_value(&create).expect("encode");
        check!(
            json == serde_json::json!({
                "username": "alice",
                "proxies": {"vless": {}},
                "data_limit": 1_073_741_824
            })
        );
    }

    #[test]
    fn modify_sends_only_changed_fields() {
        let modify = UserModify {
            status: Some(UserStatus::Disabled),
            data_limit_reset_strategy: Some(DataLimitResetStrategy::Month),
            note: Some("paused".to_string()),
            ..UserModify::default()
        };

        let json = serde_json::to_string_pretty(&modify).expect("encode");
        insta::assert_snapshot!(json, @r#"
        {
          "data_limit_reset_strategy": "month",
          "status": "disabled",
          "note": "paused"
        }
        "#);
    }

    #[test]
    fn next_plan_defaults() {
        let_assert!(Ok(plan) = serde_json::from_str::<NextPlan>("{}"));
        check!(plan.fire_on_either);
        check!(!plan.add_remaining_traffic);
    }
}
