//! CRLF-delimited line reading.

use alloc::string::String;
use alloc::vec::Vec;

use super::error::Error;
use crate::network::Read;
use crate::network::error::Error as NetworkError;

/// Maps any transport read failure to the portable read error.
pub(crate) fn read_failed<E>(_: E) -> Error {
    Error::Connection(NetworkError::ReadError)
}

/// Reads one byte, returning `None` at end-of-stream.
pub(crate) fn read_byte<R: Read>(reader: &mut R) -> Result<Option<u8>, Error> {
    let mut byte = [0u8; 1];
    match reader.read(&mut byte).map_err(read_failed)? {
        0 => Ok(None),
        _ => Ok(Some(byte[0])),
    }
}

/// Reads bytes up to the next `\r\n`, which is consumed but not returned.
///
/// If the stream ends first, everything read so far is returned. A `\r` that
/// is not followed by `\n` is ordinary data.
pub fn read_line<R: Read>(reader: &mut R) -> Result<Vec<u8>, Error> {
    let mut line = Vec::new();
    let mut current = read_byte(reader)?;
    while let Some(b1) = current {
        let next = read_byte(reader)?;
        if b1 == b'\r' && next == Some(b'\n') {
            break;
        }
        line.push(b1);
        current = next;
    }
    Ok(line)
}

/// Reads one line and decodes it as UTF-8, replacing invalid sequences.
pub fn read_line_lossy<R: Read>(reader: &mut R) -> Result<String, Error> {
    let line = read_line(reader)?;
    Ok(String::from_utf8_lossy(&line).into_owned())
}
