//! # Chapter 1: Errors
//!
//! Every operation returns [`crate::Result`]. Match on [`crate::ErrorKind`]
//! to decide what to do:
//!
//! ```ignore
//! use marzban::ErrorKind;
//!
//! match client.user("alice").await {
//!     Ok(user) => println!("{:?}", user.status),
//!     Err(err) if err.is_not_found() => println!("no such user"),
//!     Err(err) => match err.kind() {
//!         ErrorKind::Transport => eprintln!("panel unreachable: {err}"),
//!         ErrorKind::Server => eprintln!("panel said no: {err}"),
//!         ErrorKind::Decoding => eprintln!("unexpected response: {err}"),
//!         _ => eprintln!("{err}"),
//!     },
//! }
//! ```
//!
//! Server errors keep the raw body. The panel usually answers with
//! `{"detail": ...}`, which can be decoded on demand:
//!
//! ```ignore
//! #[derive(serde::Deserialize)]
//! struct Detail { detail: serde_json::Value }
//!
//! if let Some(Ok(detail)) = err.decode_body::<Detail>() {
//!     eprintln!("{}", detail.detail);
//! }
//! ```
//!
//! Nothing is retried. An expired token surfaces as a 401 server error;
//! call `login` again and repeat the request.
//!
//! Next: [Chapter 2: Transports & Middleware][super::chapter_2]
