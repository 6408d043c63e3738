//! Errors raised while exchanging an HTTP message.

use core::fmt;

use crate::network::error::Error as NetworkError;

/// The specific way a response violated its own framing.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Malformed {
    /// Fixed-length framing was selected but no `Content-Length` header was sent.
    MissingContentLength,
    /// `Content-Length` is not a non-negative decimal integer.
    InvalidContentLength,
    /// A chunk-size line is not a hexadecimal integer.
    InvalidChunkSize,
    /// The stream ended before a chunk delivered its declared size.
    TruncatedChunk,
}

/// An error that aborts a fetch.
///
/// Every variant is terminal for the exchange in flight. The HTTP status code
/// of a parsed response is never turned into an error.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// Connecting, writing or reading failed at the transport.
    Connection(NetworkError),
    /// The response could not be framed.
    MalformedResponse(Malformed),
    /// The body is not valid UTF-8.
    Encoding,
    /// The body is not the expected JSON document.
    Json,
}

impl From<NetworkError> for Error {
    fn from(e: NetworkError) -> Self {
        Error::Connection(e)
    }
}

impl From<Malformed> for Error {
    fn from(m: Malformed) -> Self {
        Error::MalformedResponse(m)
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Malformed::MissingContentLength => "missing Content-Length header",
            Malformed::InvalidContentLength => "invalid Content-Length header",
            Malformed::InvalidChunkSize => "invalid chunk size line",
            Malformed::TruncatedChunk => "stream ended inside a chunk",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Connection(e) => write!(f, "connection error: {e}"),
            Error::MalformedResponse(m) => write!(f, "malformed response: {m}"),
            Error::Encoding => f.write_str("response body is not valid UTF-8"),
            Error::Json => f.write_str("response body is not valid JSON for the target type"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Connection(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Malformed {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Malformed::MissingContentLength => defmt::write!(f, "MissingContentLength"),
            Malformed::InvalidContentLength => defmt::write!(f, "InvalidContentLength"),
            Malformed::InvalidChunkSize => defmt::write!(f, "InvalidChunkSize"),
            Malformed::TruncatedChunk => defmt::write!(f, "TruncatedChunk"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Connection(e) => defmt::write!(f, "Connection({})", e),
            Error::MalformedResponse(m) => defmt::write!(f, "MalformedResponse({})", m),
            Error::Encoding => defmt::write!(f, "Encoding"),
            Error::Json => defmt::write!(f, "Json"),
        }
    }
}
