//! Transport trait.
//!
//! The request pipeline hands every finished [`Request`] to an [`HttpClient`].
//! The default implementation lives in the `marzban` crate; tests substitute
//! their own.

use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// Core HTTP client trait.
///
/// Implementations return the response for any status code. Only transport
/// failures are errors here; status handling belongs to the pipeline.
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request and return the buffered response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the response could
    /// not be read:
    /// - Network errors
    /// - TLS errors
    /// - Timeouts
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}
