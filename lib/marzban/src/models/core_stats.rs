use serde::{Deserialize, Serialize};

/// State of the proxy core on the panel host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreStats {
    /// Core version, absent when the core is not running.
    #[serde(default)]
    pub version: Option<String>,
    /// Whether the core is running.
    pub started: bool,
    /// Websocket path streaming core logs.
    #[serde(default)]
    pub logs_websocket: Option<String>,
}
