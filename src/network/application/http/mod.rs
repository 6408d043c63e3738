//! HTTP/1.1 client over any byte-stream connection.
//!
//! This module frames HTTP/1.1 messages by hand on top of the
//! [`crate::network`] traits. It needs `alloc` but not `std`: the transport is
//! whatever [`Connect`](crate::network::Connect) implementation the caller
//! supplies.
//!
//! # Features
//!
//! - Request serialization with an always-present `Content-Length`
//! - Status line and header parsing with exact, case-sensitive header names
//! - `Content-Length` and chunked body decoding
//! - One connection per exchange, released on every exit path
//!
//! Not supported: connection reuse, TLS, redirects, retries, compression,
//! chunk trailers, and read deadlines.
//!
//! # Usage
//!
//! The parsing steps are plain functions over any [`Read`](crate::network::Read),
//! so they can be driven directly from a byte slice:
//!
//! ```rust
//! use libhttp::network::application::http::{Framing, read_headers, read_status};
//!
//! let mut stream: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nhi";
//! let status = read_status(&mut stream).unwrap();
//! let headers = read_headers(&mut stream).unwrap();
//! let body = Framing::from_headers(&headers).unwrap().decode(&mut stream).unwrap();
//!
//! assert_eq!(status.code(), "200");
//! assert_eq!(body, b"hi");
//! ```
//!
//! A [`Client`] ties the steps together over a real connection:
//!
//! ```rust,no_run
//! use libhttp::network::application::http::{Client, Request};
//!
//! let mut client = Client::with_port("10.1.1.1", 8080);
//! let request = Request::get("/icbc/paas/api/log/searchlog")
//!     .header("Content-Type", "application/json")
//!     .body(r#"{"appName":"demo"}"#);
//! let text = client.fetch_text(&request)?;
//! # Ok::<(), libhttp::network::application::http::Error>(())
//! ```

/// Response body decoding.
pub mod body;

/// The connection-owning client.
pub mod client;

/// Error types for HTTP exchanges.
pub mod error;

/// Header map and header parsing.
pub mod headers;

/// CRLF line reading.
pub mod line;

/// Requests and request serialization.
pub mod request;

/// Response type.
pub mod response;

/// Status line parsing.
pub mod status;

pub use body::{Framing, read_chunked, read_fixed};
pub use client::{Client, DEFAULT_PORT};
pub use error::{Error, Malformed};
pub use headers::{Headers, read_headers};
pub use line::read_line;
pub use request::{Method, Request, RequestWriter};
pub use response::Response;
pub use status::{Status, read_status};
