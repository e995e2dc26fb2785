//! Prelude module for convenient imports.
//!
//! ```ignore
//! use marzban::prelude::*;
//! ```

pub use crate::models::{
    Admin, AdminCreate, AdminModify, AdminsQuery, ExpiredUsersQuery, Node, NodeCreate, NodeModify,
    UsageRange, User, UserCreate, UserModify, UserStatus, UsersQuery,
};
pub use crate::{
    ClientConfig, ClientOption, Error, ErrorKind, HttpClient, HyperClient, MarzbanClient,
    RequestIntent, Result,
};
