//! Core types and traits for the marzban admin API client.
//!
//! This crate provides the transport-agnostic half of the client:
//! - [`Method`] - HTTP method enum
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`Response`] - Buffered HTTP response type
//! - [`Error`], [`ErrorKind`] and [`Result`] - Error handling
//! - [`HttpClient`] - Transport trait the pipeline executes requests with
//! - [`PathTemplate`] - Endpoint path templates and placeholder resolution
//! - [`Endpoint`] - Typed descriptors for every panel endpoint
//! - [`RequestIntent`] - Per-call description consumed by the pipeline
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//! - [`header`] - HTTP header names (re-exported from `http` crate)

mod body;
mod client;
mod endpoint;
mod error;
mod intent;
mod method;
mod path_template;
pub mod prelude;
mod request;
mod response;

pub use body::{ContentType, from_json, to_json, to_query_string};
pub use client::HttpClient;
pub use endpoint::Endpoint;
pub use error::{Error, ErrorKind, Result};
pub use intent::RequestIntent;
pub use method::Method;
pub use path_template::PathTemplate;
pub use request::{Request, RequestBuilder};
pub use response::Response;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
