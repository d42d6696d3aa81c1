//! Dataset loader against local files and a loopback HTTP stub.

use countries_rs::error::LOAD_FAILED_MESSAGE;
use countries_rs::{Client, LoadError, Source};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data.json")
}

/// Serve a single canned HTTP response on an ephemeral port; returns the base URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let mut req = Vec::new();
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => req.extend_from_slice(&buf[..n]),
                }
            }
            let resp = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(resp.as_bytes());
        }
    });
    format!("http://{}", addr)
}

#[test]
fn loads_local_fixture() {
    let client = Client::new(Source::File(fixture_path()));
    let ds = client.load().unwrap();
    assert_eq!(ds.len(), 5);
    assert_eq!(ds.records()[0].alpha3_code, "FRA");
}

#[test]
fn missing_file_is_io_error() {
    let client = Client::new(Source::File(PathBuf::from("/definitely/not/here.json")));
    let err = client.load().unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
}

#[test]
fn malformed_file_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "[{\"name\": \"France\",").unwrap();
    let err = Client::new(Source::File(path)).load().unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
    assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
}

#[test]
fn empty_array_is_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "[]").unwrap();
    let ds = Client::new(Source::File(path)).load().unwrap();
    assert!(ds.is_empty());
}

#[test]
fn http_success_parses_body() {
    let base = serve_once(
        "200 OK",
        r#"[{"name":"France","alpha3Code":"FRA","region":"Europe","population":67000000}]"#,
    );
    let ds = Client::new(Source::parse(&base)).load().unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.records()[0].name, "France");
}

#[test]
fn http_error_status_is_generic_failure() {
    let base = serve_once("404 Not Found", "not here");
    let err = Client::new(Source::parse(&base)).load().unwrap_err();
    match &err {
        LoadError::Status { status, url } => {
            assert_eq!(status.as_u16(), 404);
            assert!(url.ends_with("/data.json"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
}

#[test]
fn http_garbage_body_is_decode_error() {
    let base = serve_once("200 OK", "<html>oops</html>");
    let err = Client::new(Source::parse(&base)).load().unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
}

#[test]
fn refused_connection_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let client = Client::new(Source::parse(&format!("http://127.0.0.1:{}", port)));
    let err = client.load().unwrap_err();
    assert!(matches!(err, LoadError::Transport { .. }));
    assert_eq!(err.user_message(), LOAD_FAILED_MESSAGE);
}
