use super::{BODY, CHUNKED_RESPONSE, FIXED_RESPONSE};
use crate::{MockConnection, MockNetwork, SharedTranscript};
use libhttp::network::application::http::{
    Client, Error, Malformed, Method, Request, RequestWriter,
};

const SEARCH_QUERY: &str = r#"{"appName":"日志","page":1}"#;

fn search_request() -> Request {
    Request::get("/icbc/paas/api/log/searchlog")
        .header("Content-Type", "application/json")
        .body(SEARCH_QUERY)
}

#[test]
fn test_fetch_chunked() {
    let network = MockNetwork::new(CHUNKED_RESPONSE);
    let transcript = network.transcript();
    let mut client = Client::with_network(network, "10.1.1.1", 8080);

    let response = client.fetch(&search_request()).unwrap();
    assert_eq!(response.code(), "200");
    assert_eq!(response.reason(), Some("OK"));
    assert_eq!(response.header("Transfer-Encoding"), Some("chunked"));
    assert_eq!(response.text().unwrap(), BODY);

    let transcript = transcript.borrow();
    assert_eq!(transcript.remotes, ["10.1.1.1:8080"]);
    assert_eq!(transcript.closes, 1);
}

#[test]
fn test_fetch_fixed_length_text() {
    let network = MockNetwork::new(FIXED_RESPONSE);
    let mut client = Client::with_network(network, "10.1.1.1", 80);
    assert_eq!(client.fetch_text(&search_request()).unwrap(), BODY);
}

#[test]
fn test_request_wire_format() {
    let network = MockNetwork::new(FIXED_RESPONSE);
    let transcript = network.transcript();
    let mut client = Client::with_network(network, "10.1.1.1", 8080);
    client.fetch(&search_request()).unwrap();

    let written = String::from_utf8(transcript.borrow().written.clone()).unwrap();
    let lines: Vec<&str> = written.split("\r\n").collect();
    let content_length = format!("Content-Length: {}", SEARCH_QUERY.len());
    assert_eq!(
        lines,
        [
            "GET /icbc/paas/api/log/searchlog HTTP/1.1",
            "Host: 10.1.1.1",
            content_length.as_str(),
            "Content-Type: application/json",
            "",
            SEARCH_QUERY,
            "",
        ]
    );
    // Byte length, not character count.
    assert_eq!(SEARCH_QUERY.len(), 29);
    assert_eq!(
        written.as_bytes(),
        RequestWriter::new("10.1.1.1").encode(&search_request(), None)
    );
}

#[test]
fn test_fetch_at_overrides_target() {
    let network = MockNetwork::new(FIXED_RESPONSE);
    let transcript = network.transcript();
    let mut client = Client::with_network(network, "example.com", 80);

    let mut request = Request::new(Method::Post, "/ignored");
    request.set_text("x");
    let text = client.fetch_text_at("/search", &request).unwrap();
    assert_eq!(text, BODY);
    assert!(transcript.borrow().written.starts_with(b"POST /search HTTP/1.1\r\n"));
}

#[test]
fn test_jittery_link_yields_same_body() {
    for seed in 0..32 {
        for (response, partial_max) in [(CHUNKED_RESPONSE, 3), (FIXED_RESPONSE, 17)] {
            let network = MockNetwork::jittery(response, seed, partial_max);
            let mut client = Client::with_network(network, "example.com", 80);
            let body = client.fetch(&Request::default()).unwrap().into_body();
            assert_eq!(body, BODY.as_bytes(), "seed {seed}");
        }
    }
}

#[test]
fn test_large_chunked_body_over_jittery_link() {
    let payload: Vec<u8> = (0..40_000usize).map(|i| (i % 251) as u8).collect();
    let mut wire = b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n".to_vec();
    for chunk in payload.chunks(4093) {
        wire.extend_from_slice(format!("{:x}\r\n", chunk.len()).as_bytes());
        wire.extend_from_slice(chunk);
        wire.extend_from_slice(b"\r\n");
    }
    wire.extend_from_slice(b"0\r\n\r\n");

    let network = MockNetwork::jittery(&wire, 42, 1500);
    let mut client = Client::with_network(network, "example.com", 80);
    let response = client.fetch(&Request::get("/fw.bin")).unwrap();
    assert_eq!(response.body(), payload);
}

#[test]
fn test_truncated_chunk_fails_and_closes() {
    let cut = CHUNKED_RESPONSE.len() - 20;
    let network = MockNetwork::new(&CHUNKED_RESPONSE[..cut]);
    let transcript = network.transcript();
    let mut client = Client::with_network(network, "example.com", 80);

    let err = client.fetch(&Request::default()).unwrap_err();
    assert_eq!(err, Error::MalformedResponse(Malformed::TruncatedChunk));
    assert_eq!(transcript.borrow().closes, 1);
}

#[test]
fn test_truncated_fixed_body_is_returned() {
    let cut = FIXED_RESPONSE.len() - 10;
    let network = MockNetwork::new(&FIXED_RESPONSE[..cut]);
    let mut client = Client::with_network(network, "example.com", 80);

    let response = client.fetch(&Request::default()).unwrap();
    assert_eq!(response.body(), &BODY.as_bytes()[..BODY.len() - 10]);
}

#[test]
fn test_bad_chunk_size() {
    let network = MockNetwork::new(b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\nxyz\r\n");
    let mut client = Client::with_network(network, "example.com", 80);
    assert_eq!(
        client.fetch(&Request::default()),
        Err(Error::MalformedResponse(Malformed::InvalidChunkSize))
    );
}

#[test]
fn test_bad_content_length() {
    let network = MockNetwork::new(b"HTTP/1.1 200 OK\r\nContent-Length: lots\r\n\r\n");
    let mut client = Client::with_network(network, "example.com", 80);
    assert_eq!(
        client.fetch(&Request::default()),
        Err(Error::MalformedResponse(Malformed::InvalidContentLength))
    );
}

#[test]
fn test_error_status_is_returned() {
    let network = MockNetwork::new(b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\n\r\nnot found");
    let mut client = Client::with_network(network, "example.com", 80);
    let response = client.fetch(&Request::get("/missing")).unwrap();
    assert_eq!(response.code(), "404");
    assert_eq!(response.reason(), Some("Not Found"));
    assert_eq!(response.text().unwrap(), "not found");
}

#[test]
fn test_attached_connection_skips_connect() {
    let network = MockNetwork::new(b"");
    let transcript = network.transcript();
    let mut client = Client::with_network(network, "example.com", 80);

    let attached = SharedTranscript::default();
    client.attach(MockConnection::new(FIXED_RESPONSE, attached.clone()));
    assert_eq!(client.fetch_text(&Request::default()).unwrap(), BODY);

    assert!(transcript.borrow().remotes.is_empty());
    assert_eq!(attached.borrow().closes, 1);
    assert!(attached.borrow().written.starts_with(b"GET / HTTP/1.1\r\n"));
}

#[test]
fn test_close_releases_unused_attachment_once() {
    let network = MockNetwork::new(b"");
    let mut client = Client::with_network(network, "example.com", 80);

    let attached = SharedTranscript::default();
    client.attach(MockConnection::new(b"", attached.clone()));
    client.close();
    client.close();
    drop(client);
    assert_eq!(attached.borrow().closes, 1);
}

#[test]
fn test_closed_connection_is_a_connection_error() {
    let network = MockNetwork::new(b"");
    let mut client = Client::with_network(network, "example.com", 80);

    let attached = SharedTranscript::default();
    let mut conn = MockConnection::new(FIXED_RESPONSE, attached.clone());
    conn.is_open = false;
    client.attach(conn);

    let err = client.fetch(&Request::default()).unwrap_err();
    assert!(matches!(err, Error::Connection(_)));
    // The failed close is swallowed; the fetch error is what surfaces.
    assert_eq!(attached.borrow().closes, 1);
}

#[test]
fn test_buffered_reads_do_not_trickle() {
    let network = MockNetwork::new(FIXED_RESPONSE);
    let transcript = network.transcript();
    let mut client = Client::with_network(network, "example.com", 80);
    client.fetch(&Request::default()).unwrap();
    // Headers and body fit in one buffer fill.
    assert!(transcript.borrow().reads <= 2);
}
