use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::{
    ExpiredUsersQuery, UsageRange, User, UserCreate, UserModify, UserUsages, UsersQuery,
    UsersResponse, UsersUsages,
};
use crate::{Endpoint, Error, HttpClient, MarzbanClient, RequestIntent, Result};

impl<C: HttpClient> MarzbanClient<C> {
    /// Creates a user.
    pub async fn create_user(&self, user: &UserCreate) -> Result<User> {
        self.fetch(RequestIntent::post(Endpoint::User).json(user)?)
            .await
    }

    /// One user.
    pub async fn user(&self, username: &str) -> Result<User> {
        self.fetch(RequestIntent::get(Endpoint::UserByUsername { username }))
            .await
    }

    /// Modifies a user; unset fields are left unchanged.
    pub async fn modify_user(&self, username: &str, user: &UserModify) -> Result<User> {
        self.fetch(RequestIntent::put(Endpoint::UserByUsername { username }).json(user)?)
            .await
    }

    /// Removes a user.
    pub async fn remove_user(&self, username: &str) -> Result<()> {
        self.fetch_unit(RequestIntent::delete(Endpoint::UserByUsername { username }))
            .await
    }

    /// Resets the user's used traffic.
    pub async fn reset_user_data_usage(&self, username: &str) -> Result<()> {
        self.fetch_unit(RequestIntent::post(Endpoint::UserReset { username }))
            .await
    }

    /// Issues a new subscription token, invalidating the old URL.
    pub async fn revoke_user_subscription(&self, username: &str) -> Result<()> {
        self.fetch_unit(RequestIntent::post(Endpoint::UserRevokeSubscription { username }))
            .await
    }

    /// Lists users.
    pub async fn users(&self, query: &UsersQuery) -> Result<UsersResponse> {
        self.fetch(RequestIntent::get(Endpoint::Users).query(query)?)
            .await
    }

    /// Resets the used traffic of every user.
    pub async fn reset_users_data_usage(&self) -> Result<()> {
        self.fetch_unit(RequestIntent::post(Endpoint::UsersReset))
            .await
    }

    /// Per-node traffic of one user in `range`.
    pub async fn user_usage(&self, username: &str, range: &UsageRange) -> Result<UserUsages> {
        self.fetch(RequestIntent::get(Endpoint::UserUsage { username }).query(range)?)
            .await
    }

    /// Switches the user to their next plan now.
    pub async fn activate_next_plan(&self, username: &str) -> Result<User> {
        self.fetch(RequestIntent::post(Endpoint::UserActiveNext { username }))
            .await
    }

    /// Per-node traffic of all users in `range`.
    pub async fn users_usage(&self, range: &UsageRange) -> Result<UsersUsages> {
        self.fetch(RequestIntent::get(Endpoint::UsersUsage).query(range)?)
            .await
    }

    /// Moves the user to another admin.
    pub async fn set_user_owner(&self, username: &str, admin_username: &str) -> Result<User> {
        self.fetch(
            RequestIntent::put(Endpoint::UserSetOwner { username })
                .query_pair("admin_username", admin_username),
        )
        .await
    }

    /// Usernames of users that expired within `query`.
    pub async fn expired_users(&self, query: &ExpiredUsersQuery) -> Result<Vec<String>> {
        self.fetch(RequestIntent::get(Endpoint::UsersExpired).query(query)?)
            .await
    }

    /// Deletes users that expired within `query` and returns their usernames.
    pub async fn delete_expired_users(&self, query: &ExpiredUsersQuery) -> Result<Vec<String>> {
        self.fetch(RequestIntent::delete(Endpoint::UsersExpired).query(query)?)
            .await
    }

    /// The user's subscription URL.
    ///
    /// Only `subscription_url` is read from the user record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Semantic`] when the URL is missing or empty.
    pub async fn user_subscription_url(&self, username: &str) -> Result<String> {
        let SubscriptionUrl { subscription_url } = self
            .fetch(RequestIntent::get(Endpoint::UserByUsername { username }))
            .await?;
        if subscription_url.is_empty() {
            return Err(Error::semantic(
                "No subscription URL found",
                "The user does not have a subscription URL.",
            ));
        }
        Ok(subscription_url)
    }

    /// The user's enabled inbound tags across all protocols.
    ///
    /// Only `inbounds` is read from the user record.
    pub async fn user_inbounds(&self, username: &str) -> Result<Vec<String>> {
        let UserInbounds { inbounds } = self
            .fetch(RequestIntent::get(Endpoint::UserByUsername { username }))
            .await?;
        Ok(inbounds.into_values().flatten().collect())
    }
}

#[derive(Deserialize)]
struct SubscriptionUrl {
    #[serde(default)]
    subscription_url: String,
}

#[derive(Deserialize)]
struct UserInbounds {
    #[serde(default)]
    inbounds: BTreeMap<String, Vec<String>>,
}
