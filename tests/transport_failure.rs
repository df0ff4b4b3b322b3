//! Transport failures surface as errors, are attempted once, and never panic.

use boostai_client::{ChatClient, Error, TransportError};
use std::io::Read;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Accept connections, read the request, and hang up without answering.
fn hang_up_server() -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let attempts = Arc::new(AtomicUsize::new(0));

    let counter = attempts.clone();
    thread::spawn(move || {
        for stream in listener.incoming() {
            counter.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut stream) = stream {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
            }
        }
    });

    (base_url, attempts)
}

#[test]
fn test_send_message_error_during_request() {
    let (base_url, attempts) = hang_up_server();
    let client = ChatClient::new(base_url);

    let err = client.send_message("Hi", "1").unwrap_err();

    assert!(err.is_transport(), "unexpected error: {}", err);
    assert!(matches!(err, Error::Transport(TransportError::Http(_))));
    // Give a retry, if one were made, time to land.
    thread::sleep(Duration::from_millis(200));
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[test]
fn test_connection_refused() {
    // Bind then drop to get a port with nothing listening.
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let client = ChatClient::new(format!("http://{}", addr));

    let err = client.start_conversation().unwrap_err();
    assert!(err.is_transport());
    assert!(!err.is_parse());
}

#[test]
fn test_malformed_base_url() {
    let client = ChatClient::new("boost.ai without scheme");

    let err = client.start_conversation_with_filters(&["filter"]).unwrap_err();
    assert!(err.is_transport());
}

#[test]
fn test_request_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    thread::spawn(move || {
        // Hold connections open without responding.
        let mut held = Vec::new();
        for stream in listener.incoming().flatten() {
            held.push(stream);
        }
    });

    let client = ChatClient::builder()
        .base_url(base_url)
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();

    let err = client
        .send_message_from_phone("Hi", "1", "+15551112222")
        .unwrap_err();
    assert!(err.is_transport());
    assert!(err.is_timeout(), "expected timeout, got {}", err);
}
