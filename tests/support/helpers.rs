// tests/support/helpers.rs
use std::sync::Arc;

use axum::body;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header::AUTHORIZATION};
use serde_json::Value;

use commonminds_core::infrastructure::util::DefaultSlugGenerator;
use commonminds_core::presentation::http::routes::build_router;
use commonminds_core::presentation::http::state::HttpState;

use super::mocks;

/// Router backed by in-memory repositories and test doubles for every
/// port. Each call builds a fresh, isolated world.
pub fn make_test_router() -> axum::Router {
    let post_repo = Arc::new(mocks::InMemoryPostRepo::new());
    let services = Arc::new(
        commonminds_core::application::services::ApplicationServices::new(
            Arc::new(mocks::InMemoryUserRepo::new()),
            post_repo.clone(),
            post_repo,
            Arc::new(mocks::DummyPasswordHasher),
            Arc::new(mocks::DummyTokenManager),
            Arc::new(mocks::DummyClock),
            Arc::new(DefaultSlugGenerator),
        ),
    );

    build_router(HttpState { services }, &["*".to_owned()])
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authed_json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {}", mocks::TEST_TOKEN))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Assert the envelope every error response carries: the right status, a
/// JSON content type, and non-empty `error` / `message` fields.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value = serde_json::from_slice(&bytes).expect("valid json error body");
    assert_eq!(
        json.get("error").and_then(Value::as_str).unwrap_or(""),
        expected_error
    );
    assert!(
        !json
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("")
            .is_empty(),
        "expected non-empty message field"
    );
}
