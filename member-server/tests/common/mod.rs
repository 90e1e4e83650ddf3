//! Shared helpers for HTTP-level tests
//!
//! Routes are driven with `tower::ServiceExt::oneshot` against the
//! in-process repository, so no database is needed.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use member_server::db::MemoryMemberRepository;
use member_server::{AppState, create_router};
use serde_json::{Value, json};
use tower::ServiceExt;

pub fn test_app() -> Router {
    create_router(AppState::with_repository(MemoryMemberRepository::new()))
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}

pub fn member_payload(email: &str) -> Value {
    json!({
        "first_name": "Juan",
        "last_name": "Dela Cruz",
        "email": email,
        "membership_type": "professional",
        "is_active": true
    })
}

/// Create a member and return the response body
pub async fn create_member(app: &Router, email: &str) -> Value {
    let (status, body) = send(app, "POST", "/members/", Some(member_payload(email))).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body
}
