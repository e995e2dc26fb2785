//! # Chapter 0: Getting Started
//!
//! ## Building a client
//!
//! A client needs the panel's base URL. It is used exactly as given, so pass
//! it without a trailing slash:
//!
//! ```ignore
//! use std::time::Duration;
//! use marzban::MarzbanClient;
//!
//! let client = MarzbanClient::builder("https://panel.example.com:8000")
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//! ```
//!
//! Options apply in order, so a later `.timeout(..)` replaces an earlier one.
//!
//! ## Logging in
//!
//! `login` stores the returned token on the client. It takes `&mut self`, so
//! no request can be in flight on that client while the token changes:
//!
//! ```ignore
//! let mut client = MarzbanClient::new("https://panel.example.com")?;
//! client.login("admin", "secret").await?;
//! ```
//!
//! If the token is already known, skip the round trip:
//!
//! ```ignore
//! let client = MarzbanClient::new("https://panel.example.com")?.with_token(token);
//! ```
//!
//! Clones share the connection pool but not the token: log in once, then
//! clone the client into each task.
//!
//! ## Managing users
//!
//! ```ignore
//! use marzban::models::{UserCreate, UserModify, UsersQuery};
//!
//! let alice = client.create_user(&UserCreate::new("alice", ["vless"])).await?;
//!
//! let change = UserModify { data_limit: Some(10 << 30), ..UserModify::default() };
//! client.modify_user("alice", &change).await?;
//!
//! let page = client.users(&UsersQuery { limit: Some(20), ..UsersQuery::default() }).await?;
//! println!("{} users", page.total);
//! ```
//!
//! Next: [Chapter 1: Errors][super::chapter_1]
