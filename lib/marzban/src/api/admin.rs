use crate::models::{Admin, AdminCreate, AdminModify, AdminsQuery};
use crate::{Endpoint, HttpClient, MarzbanClient, RequestIntent, Result};

/// Admin management. Everything except [`MarzbanClient::current_admin`]
/// needs a sudo admin.
impl<C: HttpClient> MarzbanClient<C> {
    /// The admin the token belongs to.
    pub async fn current_admin(&self) -> Result<Admin> {
        self.fetch(RequestIntent::get(Endpoint::Admin)).await
    }

    /// Creates an admin.
    pub async fn create_admin(&self, admin: &AdminCreate) -> Result<Admin> {
        self.fetch(RequestIntent::post(Endpoint::Admin).json(admin)?)
            .await
    }

    /// Modifies an admin.
    pub async fn modify_admin(&self, username: &str, admin: &AdminModify) -> Result<Admin> {
        self.fetch(RequestIntent::put(Endpoint::AdminByUsername { username }).json(admin)?)
            .await
    }

    /// Removes an admin.
    pub async fn remove_admin(&self, username: &str) -> Result<()> {
        self.fetch_unit(RequestIntent::delete(Endpoint::AdminByUsername { username }))
            .await
    }

    /// Lists admins.
    pub async fn admins(&self, query: &AdminsQuery) -> Result<Vec<Admin>> {
        self.fetch(RequestIntent::get(Endpoint::Admins).query(query)?)
            .await
    }

    /// Disables every active user owned by the admin.
    pub async fn disable_admin_users(&self, username: &str) -> Result<()> {
        self.fetch_unit(RequestIntent::post(Endpoint::AdminUsersDisable { username }))
            .await
    }

    /// Re-activates every disabled user owned by the admin.
    pub async fn activate_admin_users(&self, username: &str) -> Result<()> {
        self.fetch_unit(RequestIntent::post(Endpoint::AdminUsersActivate { username }))
            .await
    }

    /// Resets the admin's accumulated users usage.
    pub async fn reset_admin_usage(&self, username: &str) -> Result<()> {
        self.fetch_unit(RequestIntent::post(Endpoint::AdminUsageReset { username }))
            .await
    }

    /// Traffic used by the admin's users, in bytes.
    pub async fn admin_usage(&self, username: &str) -> Result<u64> {
        self.fetch(RequestIntent::get(Endpoint::AdminUsage { username }))
            .await
    }
}
