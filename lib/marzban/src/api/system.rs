use std::collections::BTreeMap;

use crate::models::{ProxyHost, ProxyInbound, SystemStats};
use crate::{Endpoint, HttpClient, MarzbanClient, RequestIntent, Result};

impl<C: HttpClient> MarzbanClient<C> {
    /// Host resources and user counters.
    pub async fn system_stats(&self) -> Result<SystemStats> {
        self.fetch(RequestIntent::get(Endpoint::System)).await
    }

    /// Protocol to inbounds.
    pub async fn inbounds(&self) -> Result<BTreeMap<String, Vec<ProxyInbound>>> {
        self.fetch(RequestIntent::get(Endpoint::Inbounds)).await
    }

    /// Inbound tag to hosts.
    pub async fn hosts(&self) -> Result<BTreeMap<String, Vec<ProxyHost>>> {
        self.fetch(RequestIntent::get(Endpoint::Hosts)).await
    }

    /// Replaces the hosts of the given inbound tags.
    pub async fn modify_hosts(
        &self,
        hosts: &BTreeMap<String, Vec<ProxyHost>>,
    ) -> Result<BTreeMap<String, Vec<ProxyHost>>> {
        self.fetch(RequestIntent::put(Endpoint::Hosts).json(hosts)?)
            .await
    }

    /// Checks that the panel answers 200 on its base path. No token is sent.
    pub async fn ping(&self) -> Result<()> {
        self.fetch_unit(RequestIntent::get(Endpoint::Base).anonymous())
            .await
    }
}
