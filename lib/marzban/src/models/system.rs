use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Host resource and user counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStats {
    /// Panel version.
    pub version: String,
    /// Total memory, bytes.
    pub mem_total: u64,
    /// Used memory, bytes.
    pub mem_used: u64,
    /// CPU cores.
    pub cpu_cores: u32,
    /// CPU usage, percent.
    #[serde(default)]
    pub cpu_usage: f64,
    /// All users.
    pub total_user: u64,
    /// Users seen online recently.
    #[serde(default)]
    pub online_users: u64,
    /// Users in `active` status.
    #[serde(default)]
    pub users_active: u64,
    /// Users in `on_hold` status.
    #[serde(default)]
    pub users_on_hold: u64,
    /// Users in `disabled` status.
    #[serde(default)]
    pub users_disabled: u64,
    /// Users in `expired` status.
    #[serde(default)]
    pub users_expired: u64,
    /// Users in `limited` status.
    #[serde(default)]
    pub users_limited: u64,
    /// Bytes received since start.
    pub incoming_bandwidth: u64,
    /// Bytes sent since start.
    pub outgoing_bandwidth: u64,
    /// Current receive rate, bytes per second.
    #[serde(default)]
    pub incoming_bandwidth_speed: u64,
    /// Current send rate, bytes per second.
    #[serde(default)]
    pub outgoing_bandwidth_speed: u64,
}

/// An inbound defined in the core configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyInbound {
    /// Inbound tag, unique across protocols.
    pub tag: String,
    /// Proxy protocol (`vless`, `vmess`, `trojan`, `shadowsocks`).
    pub protocol: String,
    /// Transport network.
    pub network: String,
    /// TLS mode.
    pub tls: String,
    /// Port, a number or a range string.
    pub port: Value,
}

/// A host entry advertised in subscriptions for one inbound.
///
/// Fields this type does not name are kept in `extra`, so a fetched host list
/// can be modified and sent back without losing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyHost {
    /// Display remark template.
    pub remark: String,
    /// Address template.
    pub address: String,
    /// Port override.
    #[serde(default)]
    pub port: Option<u16>,
    /// TLS server name.
    #[serde(default)]
    pub sni: Option<String>,
    /// HTTP host header.
    #[serde(default)]
    pub host: Option<String>,
    /// Transport path.
    #[serde(default)]
    pub path: Option<String>,
    /// Remaining host settings.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_keeps_unknown_fields() {
        let json = r#"{"remark":"🚀 {USERNAME}","address":"{SERVER_IP}","port":null,"security":"inbound_default","alpn":""}"#;
        let host: ProxyHost = serde_json::from_str(json).expect("decode");

        assert_eq!(host.extra.get("security"), Some(&Value::from("inbound_default")));

        let back: Value = serde_json::to_value(&host).expect("encode");
        assert_eq!(back["alpn"], Value::from(""));
        assert_eq!(back["remark"], Value::from("🚀 {USERNAME}"));
    }
}
