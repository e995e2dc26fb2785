//! Typed operations, grouped by resource.
//!
//! Each operation is one [`crate::RequestIntent`] run through the pipeline
//! on [`crate::MarzbanClient`]; only the subscription-URL lookup adds a check
//! of its own.

mod admin;
mod auth;
mod node;
mod proxy_core;
mod subscription;
mod system;
mod user;
mod user_template;
