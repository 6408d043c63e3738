//! # Application Layer Protocols
//!
//! Protocols that run on top of the transport traits in [`crate::network`].
//! Clients here take any [`Connect`](crate::network::Connect) or
//! [`Read`](crate::network::Read) implementation and never reach for a
//! platform socket themselves.
//!
//! ## Usage Pattern
//!
//! 1. Pick or implement a connector for your transport
//! 2. Wrap it with the protocol client
//! 3. Use protocol-specific methods for communication
//!
//! ```rust,no_run
//! use libhttp::network::application::http::{Client, Request};
//! use libhttp::network::tcp::TcpConnector;
//!
//! // 1. Connector (here: std TCP)
//! let network = TcpConnector;
//!
//! // 2. Wrap with protocol client
//! let mut client = Client::with_network(network, "example.com", 80);
//!
//! // 3. Use protocol methods
//! let response = client.fetch(&Request::get("/api/status"))?;
//! println!("{} {:?}", response.code(), response.reason());
//! # Ok::<(), libhttp::network::application::http::Error>(())
//! ```

/// HTTP/1.1 client implementation.
///
/// Frames requests and responses by hand, supporting both `Content-Length`
/// and chunked response bodies.
pub mod http;
