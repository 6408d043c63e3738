//! Outgoing requests and their wire encoding.

use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;

use super::error::Error;
use super::headers::Headers;

/// An HTTP request method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
    /// Any other method token, sent verbatim.
    Custom(String),
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
            Method::Custom(method) => method.as_str(),
        }
    }
}

impl From<&str> for Method {
    fn from(method: &str) -> Self {
        match method {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "HEAD" => Method::Head,
            "OPTIONS" => Method::Options,
            "PATCH" => Method::Patch,
            other => Method::Custom(other.into()),
        }
    }
}

/// A request to send, owned by the caller.
///
/// `Host` and `Content-Length` are always generated by the encoder and need
/// not be set here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    target: String,
    headers: Headers,
    body: Vec<u8>,
}

impl Default for Request {
    fn default() -> Self {
        Self::new(Method::Get, "/")
    }
}

impl Request {
    /// Creates a request with no headers and an empty body.
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    pub fn get(target: impl Into<String>) -> Self {
        Self::new(Method::Get, target)
    }

    pub fn post(target: impl Into<String>) -> Self {
        Self::new(Method::Post, target)
    }

    /// Adds a header, builder style.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Replaces the body, builder style.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = target.into();
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Sets one header, replacing any previous value under the same name.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name, value);
    }

    /// Replaces all headers.
    pub fn set_headers(&mut self, headers: Headers) {
        self.headers = headers;
    }

    pub fn body_bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = body.into();
    }

    /// Sets the body to the UTF-8 bytes of `text`.
    pub fn set_text(&mut self, text: &str) {
        self.body = text.as_bytes().to_vec();
    }

    /// Serializes `value` as JSON into the body.
    ///
    /// `N` bounds the encoded size; a larger document fails with
    /// [`Error::Json`]. `Content-Type` is left for the caller to set.
    pub fn set_json<T: Serialize, const N: usize>(&mut self, value: &T) -> Result<(), Error> {
        let encoded: heapless::Vec<u8, N> =
            serde_json_core::to_vec(value).map_err(|_| Error::Json)?;
        self.body = encoded.to_vec();
        Ok(())
    }
}

/// Serializes requests into HTTP/1.1 wire bytes.
#[derive(Debug, Clone, Copy)]
pub struct RequestWriter<'a> {
    host: &'a str,
}

impl<'a> RequestWriter<'a> {
    /// Creates a writer that sends `Host: <host>`.
    pub fn new(host: &'a str) -> Self {
        Self { host }
    }

    /// Encodes the request line and headers, ending with the blank line.
    ///
    /// `Content-Length` is the byte length of the body and is sent for every
    /// method. `target` overrides the request's own target when given.
    pub fn encode_head(&self, request: &Request, target: Option<&str>) -> Vec<u8> {
        let target = target.unwrap_or(request.target.as_str());
        let mut head = Vec::with_capacity(128);

        head.extend_from_slice(request.method.as_str().as_bytes());
        head.push(b' ');
        head.extend_from_slice(target.as_bytes());
        head.extend_from_slice(b" HTTP/1.1\r\n");

        head.extend_from_slice(b"Host: ");
        head.extend_from_slice(self.host.as_bytes());
        head.extend_from_slice(b"\r\n");

        let mut digits = itoa::Buffer::new();
        head.extend_from_slice(b"Content-Length: ");
        head.extend_from_slice(digits.format(request.body.len()).as_bytes());
        head.extend_from_slice(b"\r\n");

        for (name, value) in &request.headers {
            head.extend_from_slice(name.as_bytes());
            head.extend_from_slice(b": ");
            head.extend_from_slice(value.as_bytes());
            head.extend_from_slice(b"\r\n");
        }

        head.extend_from_slice(b"\r\n");
        head
    }

    /// Encodes the full message: head, body, then one extra CRLF.
    ///
    /// The extra CRLF is not counted in `Content-Length`; servers this client
    /// talks to expect it.
    pub fn encode(&self, request: &Request, target: Option<&str>) -> Vec<u8> {
        let mut message = self.encode_head(request, target);
        message.extend_from_slice(&request.body);
        message.extend_from_slice(b"\r\n");
        message
    }
}
