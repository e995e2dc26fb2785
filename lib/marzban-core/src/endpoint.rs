//! Typed endpoint descriptors for the marzban admin API.
//!
//! Every route the client talks to is a variant of [`Endpoint`]. A variant
//! carries exactly the parameters its template needs, so a call site cannot
//! forget one or pass one the route does not have.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::PathTemplate;

/// Characters escaped in path parameter values.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// A panel endpoint together with its path parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint<'a> {
    /// `/api/admin/token`
    AdminToken,
    /// `/api/admin`
    Admin,
    /// `/api/admin/{username}`
    AdminByUsername {
        /// Admin username.
        username: &'a str,
    },
    /// `/api/admins`
    Admins,
    /// `/api/admin/{username}/users/disable`
    AdminUsersDisable {
        /// Admin username.
        username: &'a str,
    },
    /// `/api/admin/{username}/users/activate`
    AdminUsersActivate {
        /// Admin username.
        username: &'a str,
    },
    /// `/api/admin/usage/reset/{username}`
    AdminUsageReset {
        /// Admin username.
        username: &'a str,
    },
    /// `/api/admin/usage/{username}`
    AdminUsage {
        /// Admin username.
        username: &'a str,
    },

    /// `/api/core`
    Core,
    /// `/api/core/restart`
    CoreRestart,
    /// `/api/core/config`
    CoreConfig,

    /// `/api/node/settings`
    NodeSettings,
    /// `/api/node`
    Node,
    /// `/api/node/{node_id}`
    NodeById {
        /// Node identifier.
        node_id: u64,
    },
    /// `/api/nodes`
    Nodes,
    /// `/api/node/{node_id}/reconnect`
    NodeReconnect {
        /// Node identifier.
        node_id: u64,
    },
    /// `/api/nodes/usage`
    NodesUsage,

    /// `/sub/{token}/`
    Subscription {
        /// Subscription token.
        token: &'a str,
    },
    /// `/sub/{token}/info`
    SubscriptionInfo {
        /// Subscription token.
        token: &'a str,
    },
    /// `/sub/{token}/usage`
    SubscriptionUsage {
        /// Subscription token.
        token: &'a str,
    },
    /// `/sub/{token}/{client_type}`
    SubscriptionClientType {
        /// Subscription token.
        token: &'a str,
        /// Client flavour, e.g. `clash`, `sing-box`, `v2ray-json`.
        client_type: &'a str,
    },

    /// `/api/system`
    System,
    /// `/api/inbounds`
    Inbounds,
    /// `/api/hosts`
    Hosts,

    /// `/api/user_template`
    UserTemplate,
    /// `/api/user_template/{template_id}`
    UserTemplateById {
        /// Template identifier.
        template_id: u64,
    },

    /// `/api/user`
    User,
    /// `/api/user/{username}`
    UserByUsername {
        /// Username.
        username: &'a str,
    },
    /// `/api/user/{username}/reset`
    UserReset {
        /// Username.
        username: &'a str,
    },
    /// `/api/user/{username}/revoke_sub`
    UserRevokeSubscription {
        /// Username.
        username: &'a str,
    },
    /// `/api/users`
    Users,
    /// `/api/users/reset`
    UsersReset,
    /// `/api/user/{username}/usage`
    UserUsage {
        /// Username.
        username: &'a str,
    },
    /// `/api/user/{username}/active-next`
    UserActiveNext {
        /// Username.
        username: &'a str,
    },
    /// `/api/users/usage`
    UsersUsage,
    /// `/api/user/{username}/set-owner`
    UserSetOwner {
        /// Username.
        username: &'a str,
    },
    /// `/api/users/expired`
    UsersExpired,

    /// `/`
    Base,
}

impl Endpoint<'_> {
    /// The path template of this endpoint.
    #[must_use]
    pub const fn template(&self) -> PathTemplate {
        let template = match self {
            Self::AdminToken => "/api/admin/token",
            Self::Admin => "/api/admin",
            Self::AdminByUsername { .. } => "/api/admin/{username}",
            Self::Admins => "/api/admins",
            Self::AdminUsersDisable { .. } => "/api/admin/{username}/users/disable",
            Self::AdminUsersActivate { .. } => "/api/admin/{username}/users/activate",
            Self::AdminUsageReset { .. } => "/api/admin/usage/reset/{username}",
            Self::AdminUsage { .. } => "/api/admin/usage/{username}",
            Self::Core => "/api/core",
            Self::CoreRestart => "/api/core/restart",
            Self::CoreConfig => "/api/core/config",
            Self::NodeSettings => "/api/node/settings",
            Self::Node => "/api/node",
            Self::NodeById { .. } => "/api/node/{node_id}",
            Self::Nodes => "/api/nodes",
            Self::NodeReconnect { .. } => "/api/node/{node_id}/reconnect",
            Self::NodesUsage => "/api/nodes/usage",
            Self::Subscription { .. } => "/sub/{token}/",
            Self::SubscriptionInfo { .. } => "/sub/{token}/info",
            Self::SubscriptionUsage { .. } => "/sub/{token}/usage",
            Self::SubscriptionClientType { .. } => "/sub/{token}/{client_type}",
            Self::System => "/api/system",
            Self::Inbounds => "/api/inbounds",
            Self::Hosts => "/api/hosts",
            Self::UserTemplate => "/api/user_template",
            Self::UserTemplateById { .. } => "/api/user_template/{template_id}",
            Self::User => "/api/user",
            Self::UserByUsername { .. } => "/api/user/{username}",
            Self::UserReset { .. } => "/api/user/{username}/reset",
            Self::UserRevokeSubscription { .. } => "/api/user/{username}/revoke_sub",
            Self::Users => "/api/users",
            Self::UsersReset => "/api/users/reset",
            Self::UserUsage { .. } => "/api/user/{username}/usage",
            Self::UserActiveNext { .. } => "/api/user/{username}/active-next",
            Self::UsersUsage => "/api/users/usage",
            Self::UserSetOwner { .. } => "/api/user/{username}/set-owner",
            Self::UsersExpired => "/api/users/expired",
            Self::Base => "/",
        };
        PathTemplate::new(template)
    }

    /// The concrete path, with every parameter percent-encoded as a path
    /// segment and substituted into the template.
    #[must_use]
    pub fn path(&self) -> String {
        let params: Vec<(&str, String)> = match *self {
            Self::AdminByUsername { username }
            | Self::AdminUsersDisable { username }
            | Self::AdminUsersActivate { username }
            | Self::AdminUsageReset { username }
            | Self::AdminUsage { username }
            | Self::UserByUsername { username }
            | Self::UserReset { username }
            | Self::UserRevokeSubscription { username }
            | Self::UserUsage { username }
            | Self::UserActiveNext { username }
            | Self::UserSetOwner { username } => vec![("username", encode(username))],
            Self::NodeById { node_id } | Self::NodeReconnect { node_id } => {
                vec![("node_id", node_id.to_string())]
            }
            Self::Subscription { token }
            | Self::SubscriptionInfo { token }
            | Self::SubscriptionUsage { token } => vec![("token", encode(token))],
            Self::SubscriptionClientType { token, client_type } => vec![
                ("token", encode(token)),
                ("client_type", encode(client_type)),
            ],
            Self::UserTemplateById { template_id } => {
                vec![("template_id", template_id.to_string())]
            }
            _ => Vec::new(),
        };

        let params: Vec<(&str, &str)> = params
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        self.template().resolve(&params)
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string()
}

impl std::fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_endpoint() -> Vec<Endpoint<'static>> {
        vec![
            Endpoint::AdminToken,
            Endpoint::Admin,
            Endpoint::AdminByUsername { username: "root" },
            Endpoint::Admins,
            Endpoint::AdminUsersDisable { username: "root" },
            Endpoint::AdminUsersActivate { username: "root" },
            Endpoint::AdminUsageReset { username: "root" },
            Endpoint::AdminUsage { username: "root" },
            Endpoint::Core,
            Endpoint::CoreRestart,
            Endpoint::CoreConfig,
            Endpoint::NodeSettings,
            Endpoint::Node,
            Endpoint::NodeById { node_id: 3 },
            Endpoint::Nodes,
            Endpoint::NodeReconnect { node_id: 3 },
            Endpoint::NodesUsage,
            Endpoint::Subscription { token: "tk" },
            Endpoint::SubscriptionInfo { token: "tk" },
            Endpoint::SubscriptionUsage { token: "tk" },
            Endpoint::SubscriptionClientType {
                token: "tk",
                client_type: "clash",
            },
            Endpoint::System,
            Endpoint::Inbounds,
            Endpoint::Hosts,
            Endpoint::UserTemplate,
            Endpoint::UserTemplateById { template_id: 7 },
            Endpoint::User,
            Endpoint::UserByUsername { username: "alice" },
            Endpoint::UserReset { username: "alice" },
            Endpoint::UserRevokeSubscription { username: "alice" },
            Endpoint::Users,
            Endpoint::UsersReset,
            Endpoint::UserUsage { username: "alice" },
            Endpoint::UserActiveNext { username: "alice" },
            Endpoint::UsersUsage,
            Endpoint::UserSetOwner { username: "alice" },
            Endpoint::UsersExpired,
            Endpoint::Base,
        ]
    }

    #[test]
    fn every_endpoint_resolves_fully() {
        for endpoint in every_endpoint() {
            let path = endpoint.path();
            assert!(path.starts_with('/'), "{path}");
            assert!(!path.contains('{'), "unresolved placeholder in {path}");
            assert!(!path.contains('}'), "unresolved placeholder in {path}");
        }
    }

    #[test]
    fn endpoint_table() {
        let table = every_endpoint()
            .iter()
            .map(|endpoint| format!("{} -> {}", endpoint.template(), endpoint.path()))
            .collect::<Vec<_>>()
            .join("\n");

        insta::assert_snapshot!(table, @r"
        /api/admin/token -> /api/admin/token
        /api/admin -> /api/admin
        /api/admin/{username} -> /api/admin/root
        /api/admins -> /api/admins
        /api/admin/{username}/users/disable -> /api/admin/root/users/disable
        /api/admin/{username}/users/activate -> /api/admin/root/users/activate
        /api/admin/usage/reset/{username} -> /api/admin/usage/reset/root
        /api/admin/usage/{username} -> /api/admin/usage/root
        /api/core -> /api/core
        /api/core/restart -> /api/core/restart
        /api/core/config -> /api/core/config
        /api/node/settings -> /api/node/settings
        /api/node -> /api/node
        /api/node/{node_id} -> /api/node/3
        /api/nodes -> /api/nodes
        /api/node/{node_id}/reconnect -> /api/node/3/reconnect
        /api/nodes/usage -> /api/nodes/usage
        /sub/{token}/ -> /sub/tk/
        /sub/{token}/info -> /sub/tk/info
        /sub/{token}/usage -> /sub/tk/usage
        /sub/{token}/{client_type} -> /sub/tk/clash
        /api/system -> /api/system
        /api/inbounds -> /api/inbounds
        /api/hosts -> /api/hosts
        /api/user_template -> /api/user_template
        /api/user_template/{template_id} -> /api/user_template/7
        /api/user -> /api/user
        /api/user/{username} -> /api/user/alice
        /api/user/{username}/reset -> /api/user/alice/reset
        /api/user/{username}/revoke_sub -> /api/user/alice/revoke_sub
        /api/users -> /api/users
        /api/users/reset -> /api/users/reset
        /api/user/{username}/usage -> /api/user/alice/usage
        /api/user/{username}/active-next -> /api/user/alice/active-next
        /api/users/usage -> /api/users/usage
        /api/user/{username}/set-owner -> /api/user/alice/set-owner
        /api/users/expired -> /api/users/expired
        / -> /
        ");
    }

    #[test]
    fn user_path() {
        let endpoint = Endpoint::UserByUsername { username: "alice" };
        assert_eq!(endpoint.path(), "/api/user/alice");
        assert_eq!(endpoint.to_string(), "/api/user/alice");
    }

    #[test]
    fn path_values_are_segment_encoded() {
        let endpoint = Endpoint::UserByUsername {
            username: "a b/../c",
        };
        assert_eq!(endpoint.path(), "/api/user/a%20b%2F..%2Fc");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        let endpoint = Endpoint::UserUsage {
            username: "user_01-x.y~z",
        };
        assert_eq!(endpoint.path(), "/api/user/user_01-x.y~z/usage");
    }
}
