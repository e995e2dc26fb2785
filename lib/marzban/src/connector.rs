//! HTTPS connector for the default transport.
//!
//! Panels are commonly reached over plain HTTP on a private network as well
//! as over HTTPS, so the connector accepts both schemes.

use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;

/// rustls client config trusting the Mozilla root set.
fn tls_config() -> rustls::ClientConfig {
    let roots: rustls::RootCertStore = webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect();

    rustls::ClientConfig::builder()
        .with_root_certificates(roots)
        .with_no_client_auth()
}

/// HTTP or HTTPS connector negotiating HTTP/1.1 or HTTP/2.
#[must_use]
pub(crate) fn https_connector() -> HttpsConnector<HttpConnector> {
    HttpsConnectorBuilder::new()
        .with_tls_config(tls_config())
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build()
}
