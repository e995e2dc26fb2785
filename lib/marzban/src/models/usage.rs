use serde::{Deserialize, Serialize};

/// Time window for usage queries. Bounds are ISO-8601 timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsageRange {
    /// Inclusive start; the panel defaults to 30 days ago.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Exclusive end; the panel defaults to now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl UsageRange {
    /// Range between two timestamps.
    #[must_use]
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }
}

/// Expiry window for `GET`/`DELETE /api/users/expired`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpiredUsersQuery {
    /// Only users that expired after this timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_after: Option<String>,
    /// Only users that expired before this timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_before: Option<String>,
}

/// Traffic of one user on one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUsage {
    /// Node id, `None` for the panel host.
    #[serde(default)]
    pub node_id: Option<u64>,
    /// Node name.
    pub node_name: String,
    /// Bytes used.
    pub used_traffic: u64,
}

/// Per-node traffic of one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUsages {
    /// Whose traffic.
    pub username: String,
    /// One entry per node.
    pub usages: Vec<UserUsage>,
}

/// Per-node traffic of all users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersUsages {
    /// One entry per node.
    pub usages: Vec<UserUsage>,
}
