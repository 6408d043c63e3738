use libhttp::network::error::Error;
use libhttp::network::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;


/// Everything a mock connection observed, shared with the test after the
/// client has consumed the connection.
#[derive(Debug, Default)]
struct Transcript {
    remotes: Vec<String>,
    written: Vec<u8>,
    reads: usize,
    closes: usize,
}

type SharedTranscript = Rc<RefCell<Transcript>>;

#[derive(Debug)]
struct MockConnection {
    incoming: Vec<u8>,
    transcript: SharedTranscript,
    is_open: bool,
    // Caps each read at a random size in 1..=max to simulate a jittery link.
    jitter: Option<(StdRng, usize)>,
}

impl MockConnection {
    fn new(incoming: &[u8], transcript: SharedTranscript) -> Self {
        Self {
            incoming: incoming.to_vec(),
            transcript,
            is_open: true,
            jitter: None,
        }
    }

    fn with_jitter(mut self, seed: u64, partial_max: usize) -> Self {
        self.jitter = Some((StdRng::seed_from_u64(seed), partial_max.max(1)));
        self
    }
}

impl Read for MockConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if !self.is_open {
            return Err(Error::NotOpen);
        }
        self.transcript.borrow_mut().reads += 1;

        let mut len = buf.len().min(self.incoming.len());
        if let Some((rng, max)) = &mut self.jitter {
            if len > 0 {
                len = len.min(rng.gen_range(1..=*max));
            }
        }
        let data: Vec<u8> = self.incoming.drain(..len).collect();
        buf[..len].copy_from_slice(&data);
        Ok(len)
    }
}

impl Write for MockConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if !self.is_open {
            return Err(Error::NotOpen);
        }
        self.transcript.borrow_mut().written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if !self.is_open {
            return Err(Error::NotOpen);
        }
        Ok(())
    }
}

impl Close for MockConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        self.transcript.borrow_mut().closes += 1;
        if !self.is_open {
            return Err(Error::NotOpen);
        }
        Ok(())
    }
}

impl Connection for MockConnection {}

/// Hands out connections that replay `response`.
#[derive(Debug)]
struct MockNetwork {
    response: Vec<u8>,
    transcript: SharedTranscript,
    jitter: Option<(u64, usize)>,
}

impl MockNetwork {
    fn new(response: &[u8]) -> Self {
        Self {
            response: response.to_vec(),
            transcript: SharedTranscript::default(),
            jitter: None,
        }
    }

    fn jittery(response: &[u8], seed: u64, partial_max: usize) -> Self {
        Self {
            jitter: Some((seed, partial_max)),
            ..Self::new(response)
        }
    }

    fn transcript(&self) -> SharedTranscript {
        self.transcript.clone()
    }
}

impl Connect for MockNetwork {
    type Connection = MockConnection;
    type Error = Error;

    fn connect(&mut self, remote: &str) -> Result<Self::Connection, Self::Error> {
        self.transcript.borrow_mut().remotes.push(remote.to_string());
        let conn = MockConnection::new(&self.response, self.transcript.clone());
        Ok(match self.jitter {
            Some((seed, partial_max)) => conn.with_jitter(seed, partial_max),
            None => conn,
        })
    }
}

#[test]
fn test_connect_and_close() {
    let mut network = MockNetwork::new(b"");
    let transcript = network.transcript();
    let conn = network.connect("mock:80").unwrap();
    assert!(conn.is_open);
    conn.close().unwrap();
    assert_eq!(transcript.borrow().remotes, ["mock:80"]);
    assert_eq!(transcript.borrow().closes, 1);
}

#[test]
fn test_read_write() {
    let transcript = SharedTranscript::default();
    let mut conn = MockConnection::new(&[5, 6, 7, 8], transcript.clone());

    let write_data = [1, 2, 3, 4];
    let bytes_written = conn.write(&write_data).unwrap();
    assert_eq!(bytes_written, write_data.len());
    assert_eq!(transcript.borrow().written, write_data);

    let mut read_buf = [0; 4];
    let bytes_read = conn.read(&mut read_buf).unwrap();
    assert_eq!(bytes_read, 4);
    assert_eq!(read_buf, [5, 6, 7, 8]);
}

#[test]
fn test_read_empty() {
    let mut conn = MockConnection::new(&[], SharedTranscript::default());
    let mut read_buf = [0; 4];
    assert_eq!(conn.read(&mut read_buf).unwrap(), 0);
}

#[test]
fn test_jitter_fragments_reads() {
    let data: Vec<u8> = (0..200u8).collect();
    let mut conn = MockConnection::new(&data, SharedTranscript::default()).with_jitter(7, 5);
    let mut out = Vec::new();
    let mut buf = [0u8; 64];
    loop {
        let n = conn.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        assert!(n <= 5);
        out.extend_from_slice(&buf[..n]);
    }
    assert_eq!(out, data);
}

#[test]
fn test_buffered_reader_over_jittery_connection() {
    let data: Vec<u8> = (0..=255u8).cycle().take(3000).collect();
    let conn = MockConnection::new(&data, SharedTranscript::default()).with_jitter(11, 97);
    let mut reader = BufReader::new(conn);
    let mut out = Vec::new();
    let mut buf = [0u8; 10];
    loop {
        let n = reader.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        out.extend_from_slice(&buf[..n]);
    }
    assert_eq!(out, data);
}

#[test]
fn test_op_on_closed_connection() {
    let mut conn = MockConnection::new(b"data", SharedTranscript::default());
    conn.is_open = false;

    let mut buf = [0; 4];
    assert_eq!(conn.read(&mut buf), Err(Error::NotOpen));
    assert_eq!(conn.write(&[1, 2]), Err(Error::NotOpen));
    assert_eq!(conn.flush(), Err(Error::NotOpen));
    assert_eq!(conn.close(), Err(Error::NotOpen));
}
