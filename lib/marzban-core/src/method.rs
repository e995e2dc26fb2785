//! Request methods used by the panel API.

use derive_more::Display;

/// The four methods the panel routes accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// Reads: users, nodes, stats, subscriptions.
    #[display("GET")]
    Get,
    /// Creates, plus actions such as login, reset and revoke.
    #[display("POST")]
    Post,
    /// Modifies an existing record.
    #[display("PUT")]
    Put,
    /// Removes a record.
    #[display("DELETE")]
    Delete,
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}
