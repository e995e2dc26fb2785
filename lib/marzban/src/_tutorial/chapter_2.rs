//! # Chapter 2: Transports & Middleware
//!
//! ## Logging
//!
//! The pipeline emits `debug` events through `tracing`. For one info event
//! per exchange, add the logging layer to the transport:
//!
//! ```ignore
//! use marzban::{HyperClient, MarzbanClient};
//!
//! let http = HyperClient::builder().with_logging().build();
//! let client = MarzbanClient::builder("https://panel.example.com")
//!     .http_client(http)
//!     .build()?;
//! ```
//!
//! Spans carry the endpoint template, e.g. `/api/user/{username}`, never the
//! resolved path.
//!
//! ## Compression
//!
//! Responses are decompressed transparently (gzip, deflate, brotli, zstd).
//! Turn it off with `.compression(false)` or by disabling the `compression`
//! feature.
//!
//! ## Custom transports
//!
//! Anything implementing [`crate::HttpClient`] can carry requests, which is
//! handy in tests:
//!
//! ```ignore
//! use marzban::{HttpClient, Request, Response, Result};
//! use bytes::Bytes;
//!
//! struct Canned;
//!
//! impl HttpClient for Canned {
//!     async fn execute(&self, _request: Request<Bytes>) -> Result<Response<Bytes>> {
//!         Ok(Response::new(200, Default::default(), Bytes::from_static(b"{}")))
//!     }
//! }
//!
//! let client = MarzbanClient::builder("http://panel.local").http_client(Canned).build()?;
//! ```
