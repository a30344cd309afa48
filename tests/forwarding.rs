//! Integration tests for the forwarding surface.

mod common;

use std::net::SocketAddr;

use axum::routing::any;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use video_gateway::config::ForwarderConfig;
use video_gateway::forward::{ForwardServer, FORWARD_ERROR_MESSAGE};
use video_gateway::Shutdown;

async fn spawn_forwarder(backend_origin: String) -> (SocketAddr, Shutdown) {
    let config = ForwarderConfig {
        bind_address: "127.0.0.1:0".to_string(),
        backend_origin,
        request_timeout_secs: 5,
    };
    let listener = TcpListener::bind(&config.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = ForwardServer::new(&config);
    tokio::spawn(async move {
        server.run(listener, rx).await.unwrap();
    });

    (addr, shutdown)
}

#[tokio::test]
async fn get_relays_backend_status_and_body() {
    let (backend, captured) = common::spawn_capture_backend(200, json!({"ok": true})).await;
    let (proxy, shutdown) = spawn_forwarder(format!("http://{}", backend)).await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("http://{}/a/b", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({"ok": true}));

    let requests = captured.lock().unwrap();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/a/b");
    assert_eq!(requests[0].body, None);

    shutdown.trigger();
}

#[tokio::test]
async fn error_statuses_are_relayed_verbatim() {
    let (backend, _captured) = common::spawn_capture_backend(404, json!({"error": "missing"})).await;
    let (proxy, shutdown) = spawn_forwarder(format!("http://{}", backend)).await;

    let res = reqwest::Client::new()
        .get(format!("http://{}/nope", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(
        res.json::<Value>().await.unwrap(),
        json!({"error": "missing"})
    );

    shutdown.trigger();
}

#[tokio::test]
async fn post_reserializes_body_and_drops_inbound_headers() {
    let (backend, captured) = common::spawn_capture_backend(200, json!({"stored": true})).await;
    let (proxy, shutdown) = spawn_forwarder(format!("http://{}", backend)).await;

    let res = reqwest::Client::new()
        .post(format!("http://{}/items/new", proxy))
        .header("authorization", "Bearer secret")
        .header("x-custom", "value")
        .json(&json!({"x": 1}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let requests = captured.lock().unwrap();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/items/new");
    assert_eq!(requests[0].body, Some(json!({"x": 1})));
    assert!(requests[0].header("authorization").is_none());
    assert!(requests[0].header("x-custom").is_none());
    assert!(requests[0]
        .header("content-type")
        .unwrap()
        .starts_with("application/json"));

    shutdown.trigger();
}

#[tokio::test]
async fn missing_path_targets_backend_root() {
    let (backend, captured) = common::spawn_capture_backend(200, json!({"root": true})).await;
    let (proxy, shutdown) = spawn_forwarder(format!("http://{}", backend)).await;

    let res = reqwest::Client::new()
        .get(format!("http://{}/", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let requests = captured.lock().unwrap();
    assert_eq!(requests[0].path, "/");

    shutdown.trigger();
}

#[tokio::test]
async fn unreachable_backend_returns_fixed_envelope() {
    let backend = common::unused_addr().await;
    let (proxy, shutdown) = spawn_forwarder(format!("http://{}", backend)).await;

    let res = reqwest::Client::new()
        .get(format!("http://{}/a", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);

    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["error"], json!(FORWARD_ERROR_MESSAGE));
    assert!(!body["details"].as_str().unwrap().is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn non_json_backend_response_returns_fixed_envelope() {
    let router = Router::new().route("/{*path}", any(|| async { "plain text" }));
    let backend = common::spawn_backend(router).await;
    let (proxy, shutdown) = spawn_forwarder(format!("http://{}", backend)).await;

    let res = reqwest::Client::new()
        .get(format!("http://{}/a", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);

    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["error"], json!(FORWARD_ERROR_MESSAGE));

    shutdown.trigger();
}

#[tokio::test]
async fn invalid_inbound_json_returns_fixed_envelope() {
    let (backend, captured) = common::spawn_capture_backend(200, json!({"ok": true})).await;
    let (proxy, shutdown) = spawn_forwarder(format!("http://{}", backend)).await;

    let res = reqwest::Client::new()
        .post(format!("http://{}/items", proxy))
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);

    let body = res.json::<Value>().await.unwrap();
    assert_eq!(body["error"], json!(FORWARD_ERROR_MESSAGE));
    assert!(captured.lock().unwrap().is_empty());

    shutdown.trigger();
}
