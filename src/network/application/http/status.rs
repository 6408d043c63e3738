//! Status line parsing.

use alloc::string::{String, ToString};

use super::error::Error;
use super::line::read_line_lossy;
use crate::network::Read;

/// The code and reason phrase from a response status line.
///
/// The code is kept as text; nothing checks that it is numeric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    code: String,
    reason: Option<String>,
}

impl Status {
    pub fn new(code: impl Into<String>, reason: Option<String>) -> Self {
        Self {
            code: code.into(),
            reason,
        }
    }

    /// Parses `<protocol> <code> [reason]`.
    ///
    /// The protocol token is discarded. Without a second space the remainder
    /// is the code and there is no reason. A line with no space at all yields
    /// an empty code.
    pub fn parse(line: &str) -> Self {
        let Some((_protocol, rest)) = line.split_once(' ') else {
            return Self::default();
        };
        match rest.split_once(' ') {
            Some((code, reason)) => Self::new(code, Some(reason.to_string())),
            None => Self::new(rest, None),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// The code as a number, if it is one.
    pub fn code_u16(&self) -> Option<u16> {
        self.code.parse().ok()
    }
}

/// Reads and parses the status line.
pub fn read_status<R: Read>(reader: &mut R) -> Result<Status, Error> {
    let line = read_line_lossy(reader)?;
    Ok(Status::parse(&line))
}
