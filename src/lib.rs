//! # libhttp - Minimal HTTP/1.1 client
//!
//! A small HTTP/1.1 client that builds a request, sends it over a byte-stream
//! connection, and parses the status line, headers and body of the response.
//! All message framing is done by hand; no HTTP library is involved.
//!
//! ## Features
//!
//! - **Transport agnostic**: runs over anything implementing the
//!   [`network`] traits; a TCP transport is included with `std`
//! - **Both body framings**: `Content-Length` and `Transfer-Encoding: chunked`
//! - **Independent parsers**: line reading, status, headers and body decoding
//!   are plain functions over a readable stream
//! - **`no_std` + `alloc`** core for embedded targets
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libhttp = "0.1.0"
//! ```
//!
//! ### Basic Example
//!
//! ```rust,no_run
//! use libhttp::network::application::http::{Client, Method, Request};
//!
//! let mut client = Client::new("httpbin.org");
//!
//! let request = Request::new(Method::Post, "/post")
//!     .header("Content-Type", "application/json")
//!     .body(r#"{"hello":"world"}"#);
//!
//! let response = client.fetch(&request)?;
//! assert_eq!(response.code(), "200");
//! # Ok::<(), libhttp::network::application::http::Error>(())
//! ```
//!
//! ### Custom Transport
//!
//! ```rust
//! use libhttp::network::application::http::{Client, Request};
//! use libhttp::network::{Close, Connect, Connection, Read, Write};
//! # struct Modem;
//! # impl Read for Modem {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for Modem {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Close for Modem {
//! #     type Error = ();
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Connection for Modem {}
//! # struct ModemNetwork;
//! # impl Connect for ModemNetwork {
//! #     type Connection = Modem;
//! #     type Error = ();
//! #     fn connect(&mut self, _remote: &str) -> Result<Modem, ()> { Ok(Modem) }
//! # }
//!
//! let mut client = Client::with_network(ModemNetwork, "device.local", 80);
//! // This modem never answers, so the response has no framing headers.
//! assert!(client.fetch(&Request::default()).is_err());
//! ```
//!
//! ## Optional Features
//!
//! - `std` (default): TCP transport and `std` integration
//! - `defmt`: log through `defmt` for embedded debugging
//! - `log`: log through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

mod log;

/// Transport traits, the buffered reader, and the HTTP protocol layer.
pub mod network;
