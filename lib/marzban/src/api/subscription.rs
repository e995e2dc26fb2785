//! Subscription endpoints. They are authorized by the subscription token in
//! the path, never by the admin bearer token.

use crate::models::{UsageRange, User, UserUsages};
use crate::{Endpoint, HttpClient, MarzbanClient, RequestIntent, Result};

impl<C: HttpClient> MarzbanClient<C> {
    /// Subscription content for `token`.
    ///
    /// The panel picks the output format from the `User-Agent`; pass the
    /// client's own user agent to get what that client would get.
    pub async fn user_subscription(&self, token: &str, user_agent: Option<&str>) -> Result<String> {
        let mut intent = RequestIntent::get(Endpoint::Subscription { token }).anonymous();
        if let Some(user_agent) = user_agent {
            intent = intent.header("user-agent", user_agent);
        }
        self.fetch_text(intent).await
    }

    /// The user behind `token`.
    pub async fn user_subscription_info(&self, token: &str) -> Result<User> {
        self.fetch(RequestIntent::get(Endpoint::SubscriptionInfo { token }).anonymous())
            .await
    }

    /// Per-node traffic of the user behind `token`.
    pub async fn user_subscription_usage(
        &self,
        token: &str,
        range: &UsageRange,
    ) -> Result<UserUsages> {
        self.fetch(
            RequestIntent::get(Endpoint::SubscriptionUsage { token })
                .anonymous()
                .query(range)?,
        )
        .await
    }

    /// Subscription content in the format of `client_type` (`clash`,
    /// `clash-meta`, `sing-box`, `outline`, `v2ray`, `v2ray-json`).
    pub async fn user_subscription_with_client_type(
        &self,
        token: &str,
        client_type: &str,
    ) -> Result<String> {
        self.fetch_text(
            RequestIntent::get(Endpoint::SubscriptionClientType { token, client_type }).anonymous(),
        )
        .await
    }
}
