// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tower::ServiceExt;

use opengraph_server::{config::Config, state::AppState};

pub const ARTICLE_HTML: &str = r#"<!doctype html>
<html><head>
  <title>Fallback title is ignored</title>
  <meta property="og:site_name" content="Example Site">
  <meta property="og:title" content="Hello World">
  <meta property="og:description" content="A page about things">
  <meta property="og:image" content="https://cdn.example/hero.png">
  <meta property="twitter:card" content="summary">
</head><body><p>Hi</p></body></html>"#;

pub const CANONICAL_HTML: &str = r#"<html><head>
  <meta property="og:title" content="First">
  <meta property="og:url" content="https://canonical.example/">
  <meta property="og:url" content="https://other.example/">
  <meta property="og:title" content="Second">
</head></html>"#;

// ── Target site ──────────────────────────────────────────────────────────────

/// Serve a fixed set of pages on an ephemeral local port and return its address.
pub async fn spawn_target() -> SocketAddr {
    let site = Router::new()
        .route("/article", get(|| async { Html(ARTICLE_HTML) }))
        .route("/canonical", get(|| async { Html(CANONICAL_HTML) }))
        .route(
            "/plain",
            get(|| async { Html("<html><head><title>Plain</title></head></html>") }),
        )
        .route(
            "/missing",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Html("<html><body>Not here</body></html>"),
                )
            }),
        )
        .route(
            "/image.png",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "image/png")],
                    r#"<meta property="og:title" content="Not parsed">"#,
                )
                    .into_response()
            }),
        )
        .route("/redirect", get(|| async { Redirect::temporary("/article") }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, site).await.unwrap();
    });
    addr
}

/// A target that promises a 1000-byte HTML body, sends a fragment, then hangs up.
pub async fn spawn_truncated_target() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request).await;
            let _ = stream
                .write_all(
                    b"HTTP/1.1 200 OK\r\n\
                      Content-Type: text/html\r\n\
                      Content-Length: 1000\r\n\
                      \r\n\
                      <html><head><meta property=\"og:title\" content=\"Cut",
                )
                .await;
            let _ = stream.shutdown().await;
        }
    });
    addr
}

/// An address nothing is listening on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

// ── App under test ───────────────────────────────────────────────────────────

/// Build the application router from the given environment variables.
pub fn create_test_app(vars: &[(&str, &str)]) -> Router {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config::from_lookup(|key| vars.get(key).cloned()).unwrap();
    let state = AppState::from_config(&config).unwrap();
    opengraph_server::router(state)
}

pub fn metadata_uri(target: &str) -> String {
    format!("/?url={}", urlencoding::encode(target))
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn get_uri(app: Router, uri: &str) -> TestResponse {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn preflight(app: Router, uri: &str, origin: &str) -> TestResponse {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-requested-with")
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> TestResponse {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body,
    }
}
