//! Shared helpers for the HTTP tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use menu_server::{Config, ServerState, build_router};
use serde_json::Value;
use tower::ServiceExt;

pub const BOUNDARY: &str = "menu-test-boundary";

/// Fully layered router over a fresh in-memory database
pub async fn app() -> Router {
    let work_dir = std::env::temp_dir().join("menu-server-tests");
    let config = Config::with_overrides(work_dir.to_string_lossy(), "sqlite::memory:", 0);
    let state = ServerState::in_memory(config).await.unwrap();
    build_router(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn message(&self) -> String {
        self.json()["message"].as_str().unwrap_or_default().to_string()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_empty(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::post(uri).body(Body::empty()).unwrap()).await
}

pub async fn send_json(app: &Router, method: &str, uri: &str, body: &Value) -> TestResponse {
    send_raw_json(app, method, uri, body.to_string()).await
}

pub async fn send_raw_json(app: &Router, method: &str, uri: &str, body: String) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// multipart/form-data body with a single file part
pub fn multipart_body(field: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"upload\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn upload(
    app: &Router,
    uri: &str,
    field: &str,
    content_type: &str,
    data: &[u8],
) -> TestResponse {
    let request = Request::post(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(field, content_type, data)))
        .unwrap();
    send(app, request).await
}
