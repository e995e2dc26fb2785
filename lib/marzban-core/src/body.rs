//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Content type for request and response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Plain text content type (`text/plain`).
    PlainText,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::PlainText => "text/plain",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use marzban_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Login { username: String }
///
/// let login = Login { username: "root".to_string() };
/// let bytes = to_json(&login).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"username":"root"}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Serialize a value to a query string.
///
/// Uses `serde_html_form` which supports `Vec<T>` for repeated query parameters
/// (e.g., `?status=active&status=on_hold`).
///
/// # Errors
///
/// Returns an error if query serialization fails.
///
/// # Example
///
/// ```
/// use marzban_core::to_query_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Page {
///     offset: u32,
///     #[serde(skip_serializing_if = "Option::is_none")]
///     limit: Option<u32>,
/// }
///
/// let page = Page { offset: 0, limit: Some(10) };
/// let query = to_query_string(&page).expect("serialize");
/// assert_eq!(query, "offset=0&limit=10");
/// ```
pub fn to_query_string<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_html_form::to_string(value).map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// The error names the exact field that failed (e.g. `users[0].expire`).
///
/// # Errors
///
/// Returns [`crate::Error::JsonDeserialization`] if the bytes do not match `T`.
///
/// # Example
///
/// ```
/// use marzban_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Token { access_token: String }
///
/// let bytes = br#"{"access_token":"abc"}"#;
/// let token: Token = from_json(bytes).expect("deserialize");
/// assert_eq!(token, Token { access_token: "abc".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}
