//! Header map and response header parsing.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::String;

use super::error::Error;
use super::line::read_line_lossy;
use crate::network::Read;

/// A map of header names to values.
///
/// Names are compared exactly as written: `Content-Length` and
/// `content-length` are different keys. Inserting an existing name replaces
/// its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    map: BTreeMap<String, String>,
}

impl Headers {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.map.insert(name.into(), value.into())
    }

    /// Returns the value stored under exactly `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.map.remove(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over `(name, value)` pairs.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.map.iter(),
        }
    }
}

/// Iterator over the entries of a [`Headers`] map.
#[derive(Debug)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// Stores one header line into `headers`.
///
/// The name is everything before the first `:` and is kept verbatim; the value
/// is the trimmed remainder. A line without a colon becomes a name with an
/// empty value.
pub fn parse_header_line(headers: &mut Headers, line: &str) {
    match line.split_once(':') {
        Some((name, value)) => headers.insert(name, value.trim()),
        None => headers.insert(line, ""),
    };
}

/// Reads header lines until an empty line.
///
/// Continuation lines are not unfolded; each line stands alone.
pub fn read_headers<R: Read>(reader: &mut R) -> Result<Headers, Error> {
    let mut headers = Headers::new();
    loop {
        let line = read_line_lossy(reader)?;
        if line.is_empty() {
            return Ok(headers);
        }
        parse_header_line(&mut headers, &line);
    }
}
