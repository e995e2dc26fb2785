//! Typed async client for the Marzban proxy-panel admin API.
//!
//! Every operation resolves one endpoint, sends one request and decodes one
//! response. Failures come back as [`Error`]; [`Error::kind`] tells transport,
//! encoding, server, decoding and semantic failures apart.
//!
//! # Example
//!
//! ```ignore
//! use marzban::prelude::*;
//!
//! let mut client = MarzbanClient::new("https://panel.example.com")?;
//! client.login("admin", "secret").await?;
//!
//! let user = client.create_user(&UserCreate::new("alice", ["vless"])).await?;
//! let url = client.user_subscription_url(&user.username).await?;
//! ```
//!
//! See the [tutorial][_tutorial] for a longer walk-through.

pub mod _tutorial;
mod api;
mod api_client;
mod auth;
mod client;
mod config;
mod connector;
pub mod middleware;
pub mod models;
pub mod prelude;

pub use api_client::{MarzbanClient, MarzbanClientBuilder, USER_AGENT};
pub use auth::{ClientCredentials, Credentials};
pub use client::{BoxedService, HyperClient, HyperClientBuilder, ServiceFuture};
pub use config::{ClientConfig, ClientConfigBuilder, ClientOption};

// Re-export tower for middleware composition
pub use tower;

pub use marzban_core::{
    ContentType, Endpoint, Error, ErrorKind, HttpClient, Method, PathTemplate, Request,
    RequestBuilder, RequestIntent, Response, Result, StatusCode, from_json, header, to_json,
    to_query_string,
};
