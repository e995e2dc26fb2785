use serde_json::Value;

use crate::models::CoreStats;
use crate::{Endpoint, HttpClient, MarzbanClient, RequestIntent, Result};

impl<C: HttpClient> MarzbanClient<C> {
    /// Core version and running state.
    pub async fn core_stats(&self) -> Result<CoreStats> {
        self.fetch(RequestIntent::get(Endpoint::Core)).await
    }

    /// Restarts the core on the panel host and every connected node.
    pub async fn restart_core(&self) -> Result<()> {
        self.fetch_unit(RequestIntent::post(Endpoint::CoreRestart))
            .await
    }

    /// The raw core configuration.
    pub async fn core_config(&self) -> Result<Value> {
        self.fetch(RequestIntent::get(Endpoint::CoreConfig)).await
    }

    /// Replaces the core configuration and returns the stored one.
    pub async fn modify_core_config(&self, config: &Value) -> Result<Value> {
        self.fetch(RequestIntent::put(Endpoint::CoreConfig).json(config)?)
            .await
    }
}
