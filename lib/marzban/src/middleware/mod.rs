//! Tower middleware for [`crate::HyperClient`].
//!
//! | Layer | Enabled by |
//! |-------|------------|
//! | [`LoggingLayer`] | `.with_logging()` / `.with_debug_logging()` |
//! | [`DecompressionLayer`] | `compression` option (on by default, `compression` feature) |
//!
//! Any other tower layer over [`crate::Request`]/[`crate::Response`] can be
//! added with `HyperClient::builder().layer(..)`.

#[cfg(feature = "compression")]
mod decompression;
mod logging;

#[cfg(feature = "compression")]
pub use decompression::{Decompression, DecompressionLayer};
pub use logging::{LogLevel, Logging, LoggingLayer};

pub use tower::{Layer, ServiceBuilder};
