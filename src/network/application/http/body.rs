//! Response body decoding for `Content-Length` and chunked framing.

use alloc::vec::Vec;

use super::error::{Error, Malformed};
use super::headers::Headers;
use super::line::{read_failed, read_line};
use crate::log::trace;
use crate::network::Read;

/// Header selecting the body framing.
pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
/// Header carrying the fixed body length.
pub const CONTENT_LENGTH: &str = "Content-Length";
/// The only `Transfer-Encoding` value that selects chunked decoding.
pub const CHUNKED: &str = "chunked";

const READ_BUFFER_SIZE: usize = 1024;

/// How the body of a response is delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Exactly this many bytes follow the headers.
    Fixed(u64),
    /// Hex-size-prefixed chunks ending with a zero-size chunk.
    Chunked,
}

impl Framing {
    /// Chooses the framing for a response.
    ///
    /// `Transfer-Encoding: chunked` (exact name and value) selects chunked
    /// decoding; anything else requires a valid `Content-Length`.
    pub fn from_headers(headers: &Headers) -> Result<Self, Error> {
        if headers.get(TRANSFER_ENCODING) == Some(CHUNKED) {
            return Ok(Framing::Chunked);
        }
        let value = headers
            .get(CONTENT_LENGTH)
            .ok_or(Malformed::MissingContentLength)?;
        let length = value
            .parse::<u64>()
            .map_err(|_| Malformed::InvalidContentLength)?;
        Ok(Framing::Fixed(length))
    }

    /// Reads the body from `reader` using this framing.
    pub fn decode<R: Read>(self, reader: &mut R) -> Result<Vec<u8>, Error> {
        match self {
            Framing::Fixed(length) => read_fixed(reader, length),
            Framing::Chunked => read_chunked(reader),
        }
    }
}

/// Reads up to `length` bytes.
///
/// If the stream ends early the bytes gathered so far are returned without an
/// error. No read is issued once `length` bytes are in hand, and no read asks
/// for more than what remains.
pub fn read_fixed<R: Read>(reader: &mut R, length: u64) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    let mut buffer = [0u8; READ_BUFFER_SIZE];

    // The length check must come before the read.
    while (body.len() as u64) < length {
        let remaining = length - body.len() as u64;
        let want = remaining.min(READ_BUFFER_SIZE as u64) as usize;
        let n = reader.read(&mut buffer[..want]).map_err(read_failed)?;
        if n == 0 {
            trace!("body truncated at {} bytes", body.len());
            break;
        }
        body.extend_from_slice(&buffer[..n]);
    }

    Ok(body)
}

/// Reads a chunked body and returns the concatenated chunk data.
///
/// Decoding stops at the zero-size chunk; a trailer section after it is left
/// unread.
pub fn read_chunked<R: Read>(reader: &mut R) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    loop {
        let size = read_chunk_size(reader)?;
        trace!("chunk of {} bytes", size);
        if size == 0 {
            return Ok(body);
        }
        read_chunk_data(reader, size, &mut body)?;
        // The CRLF closing the chunk data.
        read_line(reader)?;
    }
}

/// Reads a chunk-size line and parses it as hexadecimal.
pub fn read_chunk_size<R: Read>(reader: &mut R) -> Result<u64, Error> {
    let line = read_line(reader)?;
    parse_chunk_size(&line)
}

fn parse_chunk_size(line: &[u8]) -> Result<u64, Error> {
    if line.is_empty() || !line.iter().all(u8::is_ascii_hexdigit) {
        return Err(Malformed::InvalidChunkSize.into());
    }
    let digits = core::str::from_utf8(line).map_err(|_| Malformed::InvalidChunkSize)?;
    let size = u64::from_str_radix(digits, 16).map_err(|_| Malformed::InvalidChunkSize)?;
    Ok(size)
}

fn read_chunk_data<R: Read>(reader: &mut R, size: u64, body: &mut Vec<u8>) -> Result<(), Error> {
    let mut buffer = [0u8; READ_BUFFER_SIZE];
    let mut remaining = size;
    while remaining > 0 {
        let want = remaining.min(READ_BUFFER_SIZE as u64) as usize;
        let n = reader.read(&mut buffer[..want]).map_err(read_failed)?;
        if n == 0 {
            return Err(Malformed::TruncatedChunk.into());
        }
        body.extend_from_slice(&buffer[..n]);
        remaining -= n as u64;
    }
    Ok(())
}
