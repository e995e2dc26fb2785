use crate::models::{Node, NodeCreate, NodeModify, NodeSettings, NodesUsage, UsageRange};
use crate::{Endpoint, HttpClient, MarzbanClient, RequestIntent, Result};

impl<C: HttpClient> MarzbanClient<C> {
    /// Certificate and minimum version a node needs.
    pub async fn node_settings(&self) -> Result<NodeSettings> {
        self.fetch(RequestIntent::get(Endpoint::NodeSettings)).await
    }

    /// Registers a node.
    pub async fn add_node(&self, node: &NodeCreate) -> Result<Node> {
        self.fetch(RequestIntent::post(Endpoint::Node).json(node)?)
            .await
    }

    /// One node.
    pub async fn node(&self, node_id: u64) -> Result<Node> {
        self.fetch(RequestIntent::get(Endpoint::NodeById { node_id }))
            .await
    }

    /// Modifies a node.
    pub async fn modify_node(&self, node_id: u64, node: &NodeModify) -> Result<Node> {
        self.fetch(RequestIntent::put(Endpoint::NodeById { node_id }).json(node)?)
            .await
    }

    /// Removes a node.
    pub async fn remove_node(&self, node_id: u64) -> Result<()> {
        self.fetch_unit(RequestIntent::delete(Endpoint::NodeById { node_id }))
            .await
    }

    /// All nodes.
    pub async fn nodes(&self) -> Result<Vec<Node>> {
        self.fetch(RequestIntent::get(Endpoint::Nodes)).await
    }

    /// Triggers a reconnect; the result shows up later in [`Self::node`].
    pub async fn reconnect_node(&self, node_id: u64) -> Result<()> {
        self.fetch_unit(RequestIntent::post(Endpoint::NodeReconnect { node_id }))
            .await
    }

    /// Per-node traffic in `range`.
    pub async fn nodes_usage(&self, range: &UsageRange) -> Result<NodesUsage> {
        self.fetch(RequestIntent::get(Endpoint::NodesUsage).query(range)?)
            .await
    }
}
