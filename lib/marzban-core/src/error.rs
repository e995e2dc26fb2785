//! Error types for the marzban client.

use bytes::Bytes;
use derive_more::{Display, Error, From};

// ============================================================================
// Error Kind
// ============================================================================

/// Broad classification of an [`Error`].
///
/// Lets callers tell "the server reported an error" apart from "the server's
/// success response was unparsable" without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[display("transport")]
    Transport,
    /// The request body or query could not be serialized.
    #[display("encoding")]
    Encoding,
    /// The server answered with a non-200 status.
    #[display("server")]
    Server,
    /// The server answered 200 but the body did not match the expected shape.
    #[display("decoding")]
    Decoding,
    /// A well-formed response failed an operation-specific check.
    #[display("semantic")]
    Semantic,
    /// The client or the request was misconfigured (bad URL, missing credentials).
    #[display("configuration")]
    Configuration,
}

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for marzban client operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The server answered with a status other than 200.
    #[display("{message}: {detail}")]
    #[from(skip)]
    Http {
        /// HTTP status code.
        status: u16,
        /// Short message, `HTTP <status line>`.
        message: String,
        /// Status line followed by the raw response body text.
        #[error(not(source))]
        detail: String,
        /// Raw response body.
        #[error(not(source))]
        body: Bytes,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// Query string serialization error.
    #[display("query serialization error: {_0}")]
    #[from]
    QuerySerialization(serde_html_form::ser::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "users[0].expire").
        path: String,
        /// Error message.
        message: String,
    },

    /// A success body that could not be read (bad UTF-8, broken compression).
    #[display("invalid response body: {_0}")]
    #[from(skip)]
    InvalidBody(#[error(not(source))] String),

    /// A successful response that failed an operation-specific check.
    #[display("{message}: {detail}")]
    #[from(skip)]
    Semantic {
        /// Short message.
        #[error(not(source))]
        message: String,
        /// Explanation.
        #[error(not(source))]
        detail: String,
    },

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a server error from a status code and the raw response body.
    ///
    /// The message is `HTTP <status line>` and the detail carries the status
    /// line plus the body text. The body is not parsed.
    #[must_use]
    pub fn http(status: u16, body: Bytes) -> Self {
        let line = status_line(status);
        let detail = format!("status: {line}, body: {}", String::from_utf8_lossy(&body));
        Self::Http {
            status,
            message: format!("HTTP {line}"),
            detail,
            body,
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid body error.
    #[must_use]
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody(message.into())
    }

    /// Create a semantic error.
    #[must_use]
    pub fn semantic(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Semantic {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Connection(_) | Self::Tls(_) | Self::Timeout => ErrorKind::Transport,
            Self::JsonSerialization(_) | Self::QuerySerialization(_) => ErrorKind::Encoding,
            Self::Http { .. } => ErrorKind::Server,
            Self::JsonDeserialization { .. } | Self::InvalidBody(_) => ErrorKind::Decoding,
            Self::Semantic { .. } => ErrorKind::Semantic,
            Self::InvalidRequest(_) | Self::InvalidUrl(_) => ErrorKind::Configuration,
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns the HTTP status code if this is a server error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a 401 Unauthorized error.
    ///
    /// Expired or missing tokens surface this way.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Returns `true` if this is a 404 Not Found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if this is a 409 Conflict error.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// The detail text of a server or semantic error.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Http { detail, .. } | Self::Semantic { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Returns the response body if this is a server error.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Try to decode the server error body as JSON.
    ///
    /// The pipeline never does this itself; the body is carried as opaque
    /// text. Returns `None` for errors that are not server errors.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Debug, Deserialize)]
    /// struct PanelError {
    ///     detail: String,
    /// }
    ///
    /// if let Err(e) = client.user("ghost").await {
    ///     if let Some(Ok(panel)) = e.decode_body::<PanelError>() {
    ///         eprintln!("panel said: {}", panel.detail);
    ///     }
    /// }
    /// ```
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_json(body))
    }
}

/// `404 Not Found` style status line for a status code.
fn status_line(status: u16) -> String {
    let reason = http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason());
    match reason {
        Some(reason) => format!("{status} {reason}"),
        None => status.to_string(),
    }
}
