//! Integration tests for `HttpSource` against a canned local server.
//!
//! These tests verify:
//! - Endpoint paths and the bearer token on the wire
//! - Envelope decoding of success and rejection bodies
//! - Mapping of non-success statuses and transport failures

use core::time::Duration;
use stockroom_resources::{FetchError, FetchOutcome, FetchStatus, InventorySource, InventoryStore};
use stockroom_sources::HttpSource;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serves one request with `status` and `body`, returning the raw request.
async fn serve_once(status: &'static str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0_u8; 4096];
        loop {
            let read = socket.read(&mut buf).await.unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
            if request.windows(4).any(|window| window == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}/api"), handle)
}

fn source(base_url: &str, token: Option<&str>) -> HttpSource {
    HttpSource::new(
        base_url,
        token.map(str::to_string),
        Duration::from_secs(5),
    )
    .unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn lists_warehouses_with_bearer_token() {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"success":true,"result":[{"id":"b1","name":"Central","city":"Quito"}]}"#,
    )
    .await;

    let envelope = source(&base, Some("secret"))
        .list_warehouses()
        .await
        .unwrap();
    let request = server.await.unwrap().to_lowercase();

    assert!(request.starts_with("get /api/warehouses http/1.1"));
    assert!(request.contains("authorization: bearer secret"));
    let warehouses = envelope.into_result().unwrap();
    assert_eq!(warehouses.len(), 1);
    assert_eq!(warehouses[0].city, "Quito");
}

#[tokio::test]
async fn lot_path_encodes_warehouse_id() {
    let (base, server) = serve_once("200 OK", r#"{"success":true,"result":[]}"#).await;

    let envelope = source(&base, None).warehouse_lots("b 1").await.unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("GET /api/warehouses/b%201/lots HTTP/1.1"));
    assert!(!request.to_lowercase().contains("authorization"));
    assert_eq!(envelope.into_result().unwrap(), Vec::new());
}

#[tokio::test]
async fn decodes_tagged_products() {
    let (base, _server) = serve_once(
        "200 OK",
        r#"{"success":true,"result":[
            {"id":"p1","name":"Gauze","category":"Wound care","type":"supply","unit":"box"},
            {"id":"p2","name":"Paracetamol","category":"Analgesic","type":"drug",
             "activeIngredient":"paracetamol","concentration":"500 mg","presentation":"tablet"}
        ]}"#,
    )
    .await;

    let products = source(&base, None)
        .list_products()
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[1].kind().as_str(), "drug");
}

// ─────────────────────────────────────────────────────────────────────────────
// Failures
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn rejection_body_becomes_store_error() {
    let (base, _server) =
        serve_once("200 OK", r#"{"success":false,"message":"boom"}"#).await;
    let store = InventoryStore::new(Arc::new(source(&base, None)));

    let outcome = store.fetch_warehouses().await;

    assert_eq!(outcome, FetchOutcome::Failed("boom".into()));
    assert_eq!(store.warehouses().status(), FetchStatus::Failed);
}

#[tokio::test]
async fn error_status_prefers_server_message() {
    let (base, _server) = serve_once(
        "403 Forbidden",
        r#"{"success":false,"message":"token expired"}"#,
    )
    .await;

    let result = source(&base, None).list_warehouses().await.unwrap().into_result();

    assert!(matches!(result, Err(FetchError::Rejected(message)) if message == "token expired"));
}

#[tokio::test]
async fn error_status_without_envelope_keeps_status() {
    let (base, _server) = serve_once("502 Bad Gateway", "upstream down").await;

    let result = source(&base, None).list_warehouses().await;

    assert!(matches!(
        result,
        Err(FetchError::Status { status: 502, ref body }) if body == "upstream down"
    ));
}

#[tokio::test]
async fn success_without_result_is_invalid() {
    let (base, _server) = serve_once("200 OK", r#"{"success":true}"#).await;

    let result = source(&base, None).list_products().await.unwrap().into_result();

    assert!(matches!(result, Err(FetchError::InvalidResponse(_))));
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let (base, _server) = serve_once("200 OK", "not json").await;

    let result = source(&base, None).list_products().await;

    assert!(matches!(result, Err(FetchError::Json(_))));
}

#[tokio::test]
async fn connection_refused_fails_the_resource() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = InventoryStore::new(Arc::new(source(&format!("http://{addr}"), None)));
    let outcome = store.fetch_warehouse_lots("b1").await;

    assert!(matches!(
        outcome,
        FetchOutcome::Failed(message) if !message.is_empty() && !message.starts_with("http error")
    ));
    assert_eq!(
        store.warehouse_lots().status(&"b1".to_string()),
        FetchStatus::Failed
    );
}
