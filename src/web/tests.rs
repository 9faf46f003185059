use super::server::WebServer;
use super::websocket::forward_snapshots;
use crate::config::queue_config::QueueConfig;
use crate::greeting::GreetingPolicy;
use crate::session::CinemaSession;
use crate::theme;
use axum::body::{to_bytes, Body};
use axum::extract::ws::Message;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tower::ServiceExt;

fn session() -> Arc<CinemaSession> {
    Arc::new(CinemaSession::new(
        QueueConfig::default(),
        theme::default_theme(),
        None,
        GreetingPolicy::default(),
    ))
}

fn web_server() -> WebServer {
    WebServer::new(9990, "localhost".to_string(), session())
}

async fn next_snapshot(rx: &mut UnboundedReceiver<Message>) -> Value {
    let message = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("snapshot not pushed in time")
        .expect("forwarder stopped");
    match message {
        Message::Text(text) => serde_json::from_str(&text).unwrap(),
        other => panic!("unexpected message: {:?}", other),
    }
}

async fn call(server: &WebServer, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if body.is_some() {
        request = request.header("content-type", "application/json");
    }
    let request = request
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = server.create_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[test]
fn test_web_server_creation() {
    let web_server = web_server();

    assert_eq!(web_server.port, 9990);
    assert_eq!(web_server.host, "localhost");
}

#[tokio::test]
async fn test_index_page() {
    let server = web_server();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = server.create_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Cinema Queue"));
    assert!(html.contains("/api/serve"));
}

#[tokio::test]
async fn test_initial_state() {
    let server = web_server();
    let (status, state) = call(&server, "GET", "/api/state", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(state["in_line"], 0);
    assert_eq!(state["theme"]["id"], "neon");
    assert_eq!(state["themes"].as_array().unwrap().len(), theme::THEMES.len());
}

#[tokio::test]
async fn test_enqueue_vip_and_serve() {
    let server = web_server();

    let (_, first) = call(&server, "POST", "/api/enqueue", Some(r#"{"vip":false}"#)).await;
    assert_eq!(first["ticket"]["id"], 101);
    call(&server, "POST", "/api/enqueue", None).await;
    let (_, vip) = call(&server, "POST", "/api/enqueue", Some(r#"{"vip":true}"#)).await;

    let line: Vec<u64> = vip["state"]["line"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(line, vec![101, 103, 102]);
    assert_eq!(vip["state"]["line"][0]["status"], "SERVING NOW");
    assert_eq!(vip["state"]["line"][1]["is_priority"], true);
    assert_eq!(vip["state"]["wait_minutes"], 4);

    let (status, served) = call(&server, "POST", "/api/serve", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(served["ticket"]["id"], 101);
    assert_eq!(served["ticket"]["greeting"], "Enjoy the movie!");
    assert_eq!(served["state"]["history"][0]["id"], 101);
    assert_eq!(served["state"]["in_line"], 2);
}

#[tokio::test]
async fn test_serve_empty_line() {
    let server = web_server();
    let (status, served) = call(&server, "POST", "/api/serve", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(served["ticket"].is_null());
    assert_eq!(served["state"]["served"], 0);
}

#[tokio::test]
async fn test_theme_switch() {
    let server = web_server();

    let (status, state) = call(&server, "POST", "/api/theme", Some(r#"{"id":"sunset"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state["theme"]["name"], "Sunset Strip");

    let (status, _) = call(&server, "POST", "/api/theme", Some(r#"{"id":"disco"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reset() {
    let server = web_server();
    call(&server, "POST", "/api/enqueue", None).await;
    call(&server, "POST", "/api/serve", None).await;

    let (_, state) = call(&server, "POST", "/api/reset", None).await;
    assert_eq!(state["in_line"], 0);
    assert_eq!(state["served"], 0);

    let (_, next) = call(&server, "POST", "/api/enqueue", None).await;
    assert_eq!(next["ticket"]["id"], 101);
}

#[tokio::test]
async fn test_websocket_pushes_one_snapshot_per_event() {
    let session = session();
    let events = session.subscribe().await;
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    let sink = Box::pin(futures_util::sink::unfold(tx, |tx, message: Message| async move {
        tx.send(message).map_err(|_| ())?;
        Ok::<_, ()>(tx)
    }));
    let forwarder = tokio::spawn(forward_snapshots(session.clone(), events, sink));

    let initial = next_snapshot(&mut rx).await;
    assert_eq!(initial["in_line"], 0);
    assert_eq!(initial["serving"], false);

    session.admit_random(false).await;
    let admitted = next_snapshot(&mut rx).await;
    assert_eq!(admitted["in_line"], 1);

    // started, recorded, counter free
    session.serve_next().await.unwrap();
    next_snapshot(&mut rx).await;
    next_snapshot(&mut rx).await;
    let finished = next_snapshot(&mut rx).await;
    assert_eq!(finished["served"], 1);
    assert_eq!(finished["in_line"], 0);
    assert_eq!(finished["serving"], false);

    session.reset().await;
    let reset = next_snapshot(&mut rx).await;
    assert_eq!(reset["served"], 0);

    let extra = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
    assert!(extra.is_err(), "no snapshot without an event");

    forwarder.abort();
}

#[tokio::test]
async fn test_websocket_forwarder_stops_when_client_is_gone() {
    let session = session();
    let events = session.subscribe().await;
    let (tx, rx) = mpsc::unbounded_channel::<Message>();
    drop(rx);
    let sink = Box::pin(futures_util::sink::unfold(tx, |tx, message: Message| async move {
        tx.send(message).map_err(|_| ())?;
        Ok::<_, ()>(tx)
    }));

    tokio::time::timeout(Duration::from_secs(1), forward_snapshots(session, events, sink))
        .await
        .expect("forwarder kept running after the sink closed");
}
