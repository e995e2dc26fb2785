//! Prelude module for convenient imports.
//!
//! ```ignore
//! use marzban_core::prelude::*;
//! ```

pub use crate::{
    ContentType, Endpoint, Error, ErrorKind, HttpClient, Method, PathTemplate, Request,
    RequestBuilder, RequestIntent, Response, Result, from_json, to_json, to_query_string,
};
