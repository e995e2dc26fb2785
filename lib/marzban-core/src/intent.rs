//! Per-call request descriptions.
//!
//! A [`RequestIntent`] says what one operation wants: the method, the
//! endpoint with its parameters, query pairs, an already-serialized body and
//! whether the bearer token should be attached. The pipeline turns it into a
//! [`crate::Request`].

use bytes::Bytes;
use serde::Serialize;

use crate::{ContentType, Endpoint, Method, Result};

/// Description of a single API call, consumed by the request pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIntent<'a> {
    method: Method,
    endpoint: Endpoint<'a>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<(ContentType, Bytes)>,
    authenticated: bool,
}

impl<'a> RequestIntent<'a> {
    /// Authenticated call without body or query.
    #[must_use]
    pub const fn new(method: Method, endpoint: Endpoint<'a>) -> Self {
        Self {
            method,
            endpoint,
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            authenticated: true,
        }
    }

    /// `GET` on `endpoint`.
    #[must_use]
    pub const fn get(endpoint: Endpoint<'a>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    /// `POST` on `endpoint`.
    #[must_use]
    pub const fn post(endpoint: Endpoint<'a>) -> Self {
        Self::new(Method::Post, endpoint)
    }

    /// `PUT` on `endpoint`.
    #[must_use]
    pub const fn put(endpoint: Endpoint<'a>) -> Self {
        Self::new(Method::Put, endpoint)
    }

    /// `DELETE` on `endpoint`.
    #[must_use]
    pub const fn delete(endpoint: Endpoint<'a>) -> Self {
        Self::new(Method::Delete, endpoint)
    }

    /// Serializes `value` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::JsonSerialization`] if `value` cannot be encoded.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        let bytes = crate::to_json(value)?;
        self.body = Some((ContentType::Json, bytes));
        Ok(self)
    }

    /// Serializes `params` and appends them as query pairs.
    ///
    /// `None` fields skipped with `skip_serializing_if` produce no pair, and
    /// sequences produce one pair per element.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::QuerySerialization`] if `params` is not a flat
    /// struct or map.
    pub fn query<Q: Serialize + ?Sized>(mut self, params: &Q) -> Result<Self> {
        let encoded = crate::to_query_string(params)?;
        self.query
            .extend(url::form_urlencoded::parse(encoded.as_bytes()).into_owned());
        Ok(self)
    }

    /// Appends one query pair.
    #[must_use]
    pub fn query_pair(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Adds a request header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Marks the call as not needing the bearer token.
    #[must_use]
    pub const fn anonymous(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Target endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint<'a> {
        &self.endpoint
    }

    /// Query pairs in insertion order.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Extra headers in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Serialized body and its content type.
    #[must_use]
    pub fn body(&self) -> Option<(ContentType, &Bytes)> {
        self.body.as_ref().map(|(content_type, bytes)| (*content_type, bytes))
    }

    /// Whether the bearer token should be attached.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert2::{check, let_assert};

    use super::*;
    use crate::{Error, ErrorKind};

    #[test]
    fn defaults_to_authenticated_without_body() {
        let intent = RequestIntent::get(Endpoint::Admin);

        check!(intent.method() == Method::Get);
        check!(intent.is_authenticated());
        check!(intent.body().is_none());
        check!(intent.query_pairs().is_empty());
    }

    #[test]
    fn anonymous_drops_authentication() {
        let intent = RequestIntent::post(Endpoint::AdminToken).anonymous();
        check!(!intent.is_authenticated());
    }

    #[test]
    fn json_body_is_serialized_eagerly() {
        #[derive(Serialize)]
        struct Owner<'a> {
            admin_username: &'a str,
        }

        let intent = RequestIntent::put(Endpoint::UserSetOwner { username: "alice" })
            .json(&Owner {
                admin_username: "root",
            })
            .expect("serialize");

        let_assert!(Some((content_type, body)) = intent.body());
        check!(content_type == ContentType::Json);
        check!(body.as_ref() == br#"{"admin_username":"root"}"#);
    }

    #[test]
    fn json_body_failure_is_an_encoding_error() {
        let mut map = HashMap::new();
        map.insert((1, 2), "tuple keys are not JSON");

        let err = RequestIntent::post(Endpoint::User)
            .json(&map)
            .expect_err("tuple keys");

        let_assert!(Error::JsonSerialization(_) = &err);
        check!(err.kind() == ErrorKind::Encoding);
    }

    #[test]
    fn query_skips_missing_values_and_repeats_sequences() {
        #[derive(Serialize)]
        struct Filter<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            offset: Option<u32>,
            username: Vec<&'a str>,
        }

        let intent = RequestIntent::get(Endpoint::Users)
            .query(&Filter {
                offset: None,
                username: vec!["a b", "c"],
            })
            .expect("serialize");

        check!(
            intent.query_pairs()
                == [
                    ("username".to_string(), "a b".to_string()),
                    ("username".to_string(), "c".to_string()),
                ]
        );
    }

    #[test]
    fn query_rejects_non_flat_values() {
        let err = RequestIntent::get(Endpoint::Users)
            .query(&vec![1, 2, 3])
            .expect_err("sequence at top level");

        let_assert!(Error::QuerySerialization(_) = &err);
        check!(err.kind() == ErrorKind::Encoding);
    }

    #[test]
    fn headers_keep_insertion_order() {
        let intent = RequestIntent::get(Endpoint::Subscription { token: "t" })
            .anonymous()
            .header("User-Agent", "clash");

        check!(intent.headers() == [("User-Agent".to_string(), "clash".to_string())]);
    }
}
