use serde::{Deserialize, Serialize};

/// Settings a node needs to join the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSettings {
    /// Oldest node version the panel accepts.
    #[serde(default)]
    pub min_node_version: Option<String>,
    /// PEM certificate the node must trust.
    pub certificate: String,
}

/// Connection state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    /// Connected and serving.
    Connected,
    /// Connection in progress.
    Connecting,
    /// Last connection attempt failed.
    Error,
    /// Disabled by an admin.
    Disabled,
}

/// A node as reported by the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Host name or IP.
    pub address: String,
    /// Node service port.
    pub port: u16,
    /// Node API port.
    pub api_port: u16,
    /// Multiplier applied to traffic accounted on this node.
    #[serde(default = "default_usage_coefficient")]
    pub usage_coefficient: f64,
    /// Core version running on the node.
    #[serde(default)]
    pub xray_version: Option<String>,
    /// Connection state.
    pub status: NodeStatus,
    /// Last error message.
    #[serde(default)]
    pub message: Option<String>,
}

const fn default_usage_coefficient() -> f64 {
    1.0
}

/// Body of `POST /api/node`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeCreate {
    /// Display name.
    pub name: String,
    /// Host name or IP.
    pub address: String,
    /// Node service port.
    pub port: u16,
    /// Node API port.
    pub api_port: u16,
    /// Traffic multiplier.
    pub usage_coefficient: f64,
    /// Also create a host entry for every inbound.
    pub add_as_new_host: bool,
}

impl NodeCreate {
    /// Node with the panel's default ports (62050/62051).
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            port: 62050,
            api_port: 62051,
            usage_coefficient: 1.0,
            add_as_new_host: true,
        }
    }
}

/// Body of `PUT /api/node/{node_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodeModify {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Host name or IP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Node service port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Node API port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_port: Option<u16>,
    /// Traffic multiplier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_coefficient: Option<f64>,
    /// `Disabled` to disable the node, `Connecting` to re-enable it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NodeStatus>,
}

/// Traffic of one node in a time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeUsage {
    /// Node id, `None` for the panel host itself.
    #[serde(default)]
    pub node_id: Option<u64>,
    /// Node name.
    pub node_name: String,
    /// Bytes sent.
    pub uplink: u64,
    /// Bytes received.
    pub downlink: u64,
}

/// Response of `GET /api/nodes/usage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodesUsage {
    /// One entry per node.
    pub usages: Vec<NodeUsage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_decodes_with_defaults() {
        let node: Node = serde_json::from_str(
            r#"{"id":3,"name":"edge","address":"10.0.0.3","port":62050,"api_port":62051,"status":"connected","extra":1}"#,
        )
        .expect("decode");

        assert_eq!(node.status, NodeStatus::Connected);
        assert!((node.usage_coefficient - 1.0).abs() < f64::EPSILON);
        assert!(node.message.is_none());
    }

    #[test]
    fn modify_sends_only_set_fields() {
        let modify = NodeModify {
            status: Some(NodeStatus::Disabled),
            ..NodeModify::default()
        };
        assert_eq!(
            serde_json::to_string(&modify).expect("encode"),
            r#"{"status":"disabled"}"#
        );
    }
}
