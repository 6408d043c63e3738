//! Parsed responses.

use alloc::string::String;
use alloc::vec::Vec;

use serde::Deserialize;

use super::body::Framing;
use super::error::Error;
use super::headers::{Headers, read_headers};
use super::status::{Status, read_status};
use crate::log::debug;
use crate::network::Read;

/// A complete response: status, headers and the decoded body.
///
/// Any syntactically valid response is returned, whatever its status code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    status: Status,
    headers: Headers,
    body: Vec<u8>,
}

impl Response {
    pub fn new(status: Status, headers: Headers, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Reads a whole response: status line, headers, then the body in the
    /// framing the headers select.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self, Error> {
        let status = read_status(reader)?;
        debug!("status {}", status.code());
        let headers = read_headers(reader)?;
        let framing = Framing::from_headers(&headers)?;
        let body = framing.decode(reader)?;
        debug!("body of {} bytes", body.len());
        Ok(Self::new(status, headers, body))
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The status code text, e.g. `"200"`.
    pub fn code(&self) -> &str {
        self.status.code()
    }

    pub fn reason(&self) -> Option<&str> {
        self.status.reason()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Looks up a header by its exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// The body as UTF-8 text.
    pub fn text(&self) -> Result<&str, Error> {
        core::str::from_utf8(&self.body).map_err(|_| Error::Encoding)
    }

    /// Consumes the response, returning the body as an owned string.
    pub fn into_text(self) -> Result<String, Error> {
        String::from_utf8(self.body).map_err(|_| Error::Encoding)
    }

    /// Deserializes the body as JSON.
    ///
    /// String fields may borrow from the body.
    pub fn json<'a, T: Deserialize<'a>>(&'a self) -> Result<T, Error> {
        let (value, _) = serde_json_core::from_slice(&self.body).map_err(|_| Error::Json)?;
        Ok(value)
    }
}
