//! Shared helpers for the API tests: an app wired to a fresh in-memory
//! database, plus request plumbing and small factories.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

use coursebook::{app, connect, ensure_tables, AppConfig, AppState};

pub const TEST_MAX_STUDENTS: u32 = 20;

/// Builds an app over its own in-memory database. The pool is capped at
/// one connection: every `sqlite::memory:` connection is a distinct
/// database, so a second one would see empty tables.
pub async fn test_app() -> (Router, Arc<AppConfig>) {
    let config = Arc::new(AppConfig::new(
        "sqlite::memory:".to_string(),
        "127.0.0.1:0".to_string(),
        TEST_MAX_STUDENTS,
    ));
    let pool = connect(&config.database_url, 1).await.unwrap();
    ensure_tables(&pool).await.unwrap();
    let state = AppState::new(pool, config.clone());
    (app(state), config)
}

/// Pool over a fresh in-memory database with the schema applied, for
/// tests that drive the service layer directly.
pub async fn test_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:", 1).await.unwrap();
    ensure_tables(&pool).await.unwrap();
    pool
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Same as [`send`] but with a raw body, for malformed-payload tests.
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PATCH", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}

/// Creates a student and returns its id.
pub async fn create_student(app: &Router, name: &str) -> i64 {
    let (status, body) = post(app, "/api/v1/students/", json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

/// Creates `count` students and returns their ids in creation order.
pub async fn create_students(app: &Router, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        ids.push(create_student(app, &format!("student-{}", i)).await);
    }
    ids
}

/// Creates a course and returns the response body.
pub async fn create_course(app: &Router, name: &str, students: &[i64]) -> Value {
    let (status, body) = post(
        app,
        "/api/v1/courses/",
        json!({ "name": name, "students": students }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}
