//! Response decompression middleware.
//!
//! Advertises `Accept-Encoding: gzip, deflate, br, zstd` and decodes the body
//! according to `Content-Encoding` before the pipeline reads it.

use std::future::Future;
use std::io::Read;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use tower::{Layer, Service};

use crate::{Error, Request, Response, Result};

const ACCEPT_ENCODING: &str = "gzip, deflate, br, zstd";

/// Layer that enables automatic response decompression.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecompressionLayer {
    _private: (),
}

impl DecompressionLayer {
    /// Create a new decompression layer.
    #[must_use]
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl<S> Layer<S> for DecompressionLayer {
    type Service = Decompression<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Decompression { inner }
    }
}

/// Service that decompresses response bodies.
#[derive(Debug, Clone)]
pub struct Decompression<S> {
    inner: S,
}

fn read_all(mut reader: impl Read, encoding: &str) -> Result<Bytes> {
    let mut decompressed = Vec::new();
    reader
        .read_to_end(&mut decompressed)
        .map_err(|e| Error::invalid_body(format!("{encoding} decompression failed: {e}")))?;
    Ok(Bytes::from(decompressed))
}

/// Decode `body` per `encoding`; unknown encodings pass through.
fn decompress(encoding: &str, body: Bytes) -> Result<Bytes> {
    match encoding.trim().to_ascii_lowercase().as_str() {
        "gzip" | "x-gzip" => read_all(flate2::read::GzDecoder::new(body.as_ref()), "gzip"),
        "deflate" => read_all(flate2::read::ZlibDecoder::new(body.as_ref()), "deflate"),
        "br" => read_all(brotli::Decompressor::new(body.as_ref(), 4096), "brotli"),
        "zstd" => zstd::decode_all(body.as_ref())
            .map(Bytes::from)
            .map_err(|e| Error::invalid_body(format!("zstd decompression failed: {e}"))),
        _ => Ok(body),
    }
}

impl<S> Service<Request<Bytes>> for Decompression<S>
where
    S: Service<Request<Bytes>, Response = Response<Bytes>, Error = Error> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response<Bytes>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<()>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Bytes>) -> Self::Future {
        if request.header("accept-encoding").is_none() {
            request
                .headers_mut()
                .insert("accept-encoding".to_string(), ACCEPT_ENCODING.to_string());
        }

        let mut inner = self.inner.clone();

        Box::pin(async move {
            let response = inner.call(request).await?;

            let Some(encoding) = response.header("content-encoding").map(str::to_string) else {
                return Ok(response);
            };
            if encoding.is_empty() || encoding.eq_ignore_ascii_case("identity") {
                return Ok(response);
            }

            let (status, mut headers, body) = response.into_parts();
            let decompressed = decompress(&encoding, body)?;

            headers.retain(|name, _| {
                !name.eq_ignore_ascii_case("content-encoding")
                    && !name.eq_ignore_ascii_case("content-length")
            });
            headers.insert("content-length".to_string(), decompressed.len().to_string());

            Ok(Response::new(status, headers, decompressed))
        })
    }
}
