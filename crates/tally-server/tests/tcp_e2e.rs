//! Real socket tests: the server runs on an ephemeral port and is driven
//! with raw HTTP/1.1.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use tally_server::{app_state::AppState, store::UserStore};

async fn spawn_server(store: Arc<dyn UserStore>) -> (SocketAddr, AppState) {
    let (app, state) = common::app_with(store);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, state)
}

async fn roundtrip(addr: SocketAddr, raw: &str) -> String {
    let mut s = TcpStream::connect(addr).await.unwrap();
    s.write_all(raw.as_bytes()).await.unwrap();
    let mut buf = Vec::new();
    s.read_to_end(&mut buf).await.unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn end_to_end_over_tcp() {
    let (addr, _state) = spawn_server(Arc::new(tally_server::store::MemoryStore::new())).await;

    let body = r#"{"fullName":"Ada","favoriteColor":"blue","favoriteSeries":"Foundation"}"#;
    let req = format!(
        "POST /register HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    let res = roundtrip(addr, &req).await;
    assert!(res.starts_with("HTTP/1.1 200"), "{res}");
    assert!(res.contains(r#"{"id":1}"#));

    let res = roundtrip(addr, "GET /data HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n").await;
    assert!(res.starts_with("HTTP/1.1 200"));
    assert!(res.contains(
        r#"[{"id":1,"fullName":"Ada","favoriteColor":"blue","favoriteSeries":"Foundation"}]"#
    ));

    let res = roundtrip(addr, "GET /metrics HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n").await;
    assert!(res.starts_with("HTTP/1.1 200"));
    assert!(res.contains(r#"http_requests_total{method="POST",route="/register",code="200"} 1"#));
    assert!(res.contains(r#"http_requests_total{method="GET",route="/data",code="200"} 1"#));
}

#[tokio::test]
async fn client_disconnect_before_response_is_not_counted() {
    let store = Arc::new(common::SlowStore::new(Duration::from_millis(400)));
    let (addr, state) = spawn_server(store).await;

    let mut s = TcpStream::connect(addr).await.unwrap();
    s.write_all(b"GET /data HTTP/1.1\r\nHost: localhost\r\n\r\n").await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;
    drop(s);

    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(common::count(&state, "GET", "/data", "200"), 0);

    // The server is still healthy and counts completed requests.
    let res = roundtrip(addr, "GET /healthz HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n").await;
    assert!(res.starts_with("HTTP/1.1 200"));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(common::count(&state, "GET", "/healthz", "200"), 1);
}
