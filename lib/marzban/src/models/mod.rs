//! Wire models for the panel API.
//!
//! Response types ignore unknown fields and default missing optional ones, so
//! they tolerate newer panel versions. Request types skip `None` fields.

mod admin;
mod core_stats;
mod login;
mod node;
mod system;
mod template;
mod usage;
mod user;

pub use admin::{Admin, AdminCreate, AdminModify, AdminsQuery};
pub use core_stats::CoreStats;
pub use login::{LoginRequest, LoginResponse, LoginUser};
pub use node::{Node, NodeCreate, NodeModify, NodeSettings, NodeStatus, NodeUsage, NodesUsage};
pub use system::{ProxyHost, ProxyInbound, SystemStats};
pub use template::{UserTemplate, UserTemplateRequest, UserTemplatesQuery};
pub use usage::{ExpiredUsersQuery, UsageRange, UserUsage, UserUsages, UsersUsages};
pub use user::{
    DataLimitResetStrategy, NextPlan, User, UserCreate, UserModify, UserStatus, UsersQuery,
    UsersResponse,
};
