//! TCP transport for hosted platforms.
//!
//! Maps `std::io` failures onto the portable [`Error`] kinds the protocol
//! layer understands. No read or write deadline is set on the socket; a peer
//! that stops responding blocks the calling thread.

use std::io::{self, Read as _, Write as _};
use std::net::{Shutdown, TcpStream};

use super::error::Error;
use super::{Close, Connect, Connection, Read, Write};

/// Opens plain TCP connections.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpConnector;

/// A connected TCP stream.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl TcpConnection {
    /// Wraps an already connected stream.
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Returns the underlying stream.
    pub fn stream(&self) -> &TcpStream {
        &self.stream
    }
}

impl From<TcpStream> for TcpConnection {
    fn from(stream: TcpStream) -> Self {
        Self::new(stream)
    }
}

fn connect_error(e: &io::Error) -> Error {
    match e.kind() {
        io::ErrorKind::InvalidInput => Error::InvalidAddress,
        _ => Error::ConnectionRefused,
    }
}

impl Connect for TcpConnector {
    type Connection = TcpConnection;
    type Error = Error;

    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error> {
        let stream = TcpStream::connect(remote).map_err(|e| connect_error(&e))?;
        Ok(TcpConnection { stream })
    }
}

impl Read for TcpConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.stream.read(buf) {
                Ok(n) => return Ok(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == io::ErrorKind::NotConnected => return Err(Error::NotOpen),
                Err(_) => return Err(Error::ReadError),
            }
        }
    }
}

impl Write for TcpConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stream.write(buf).map_err(|_| Error::WriteError)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream.flush().map_err(|_| Error::WriteError)
    }
}

impl Close for TcpConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            // The peer already tore the connection down.
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            Err(_) => Err(Error::ConnectionClosed),
        }
    }
}

impl Connection for TcpConnection {}
