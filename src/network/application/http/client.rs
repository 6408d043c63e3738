use alloc::format;
use alloc::string::String;
use core::fmt;

use super::error::Error;
use super::request::{Request, RequestWriter};
use super::response::Response;
use crate::log::{debug, warning};
use crate::network::error::Error as NetworkError;
use crate::network::{BufReader, Close, Connect, Connection, Write};

#[cfg(feature = "std")]
use crate::network::tcp::TcpConnector;

/// Port used when none is given.
pub const DEFAULT_PORT: u16 = 80;

/// An HTTP/1.1 client for a single host.
///
/// Each fetch opens a connection (or takes the one handed over with
/// [`attach`](Client::attach)), sends one request, reads one response and
/// releases the connection again, whether the exchange succeeded or not. No
/// request or response state survives between fetches.
///
/// Fetching takes `&mut self`, so one client serves one caller at a time.
/// Callers that share a client across threads must serialize access
/// themselves, e.g. behind a mutex, or use one client per request.
pub struct Client<N: Connect> {
    network: N,
    host: String,
    port: u16,
    attached: Option<N::Connection>,
}

#[cfg(feature = "std")]
impl Client<TcpConnector> {
    /// Creates a TCP client for `host` on port 80.
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_network(TcpConnector, host, DEFAULT_PORT)
    }

    /// Creates a TCP client for `host` on `port`.
    pub fn with_port(host: impl Into<String>, port: u16) -> Self {
        Self::with_network(TcpConnector, host, port)
    }
}

impl<N: Connect> Client<N> {
    /// Creates a client that opens its connections through `network`.
    pub fn with_network(network: N, host: impl Into<String>, port: u16) -> Self {
        Self {
            network,
            host: host.into(),
            port,
            attached: None,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn set_port(&mut self, port: u16) {
        self.port = port;
    }

    /// Hands over an already connected stream for the next fetch.
    ///
    /// A connection attached earlier and not yet used is released first.
    pub fn attach(&mut self, connection: N::Connection) {
        if let Some(previous) = self.attached.replace(connection) {
            release(previous);
        }
    }

    /// Whether a connection is waiting to be used by the next fetch.
    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }

    /// Sends `request` and returns the parsed response.
    pub fn fetch(&mut self, request: &Request) -> Result<Response, Error> {
        self.exchange(request, None)
    }

    /// Sends `request` to `target` instead of the request's own target.
    pub fn fetch_at(&mut self, target: &str, request: &Request) -> Result<Response, Error> {
        self.exchange(request, Some(target))
    }

    /// Like [`fetch`](Client::fetch), returning the body as UTF-8 text.
    pub fn fetch_text(&mut self, request: &Request) -> Result<String, Error> {
        self.fetch(request)?.into_text()
    }

    /// Like [`fetch_at`](Client::fetch_at), returning the body as UTF-8 text.
    pub fn fetch_text_at(&mut self, target: &str, request: &Request) -> Result<String, Error> {
        self.fetch_at(target, request)?.into_text()
    }

    /// Releases an attached connection, if any.
    ///
    /// Calling it again is a no-op. A failure to close is logged, never
    /// returned.
    pub fn close(&mut self) {
        if let Some(connection) = self.attached.take() {
            release(connection);
        }
    }

    fn acquire(&mut self) -> Result<N::Connection, Error> {
        if let Some(connection) = self.attached.take() {
            return Ok(connection);
        }
        let remote = format!("{}:{}", self.host, self.port);
        debug!("connecting to {}", remote.as_str());
        self.network
            .connect(&remote)
            .map_err(|_| Error::Connection(NetworkError::ConnectionRefused))
    }

    fn exchange(&mut self, request: &Request, target: Option<&str>) -> Result<Response, Error> {
        let mut connection = self.acquire()?;
        let result = round_trip(&mut connection, &self.host, request, target);
        release(connection);
        result
    }
}

impl<N: Connect> Drop for Client<N> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<N: Connect> fmt::Debug for Client<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("attached", &self.attached.is_some())
            .finish_non_exhaustive()
    }
}

fn round_trip<C: Connection>(
    connection: &mut C,
    host: &str,
    request: &Request,
    target: Option<&str>,
) -> Result<Response, Error> {
    let message = RequestWriter::new(host).encode(request, target);
    debug!("sending {} bytes", message.len());
    write_all(connection, &message)?;
    connection
        .flush()
        .map_err(|_| Error::Connection(NetworkError::WriteError))?;

    let mut reader = BufReader::new(connection);
    Response::read(&mut reader)
}

fn write_all<W: Write>(writer: &mut W, mut buf: &[u8]) -> Result<(), Error> {
    while !buf.is_empty() {
        match writer
            .write(buf)
            .map_err(|_| Error::Connection(NetworkError::WriteError))?
        {
            0 => return Err(Error::Connection(NetworkError::ConnectionClosed)),
            n => buf = &buf[n..],
        }
    }
    Ok(())
}

/// Best-effort close; the outcome never reaches the caller.
fn release<C: Close>(connection: C) {
    if connection.close().is_err() {
        warning!("failed to close connection");
    }
}
