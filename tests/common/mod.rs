// tests/common/mod.rs
#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use elearn::{config::MIN_BCRYPT_COST, db, state::AppState, web::routes::create_router};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Router completo sobre uma base de dados em memória, com bcrypt barato.
pub async fn test_app() -> Router {
    let pool = db::create_memory_pool().await.expect("in-memory pool");
    create_router(AppState::new(pool, MIN_BCRYPT_COST))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    let response = app.clone().oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

/// Regista um utilizador e devolve o id criado.
pub async fn register(app: &Router, email: &str, user_type: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/auth/register",
        json!({
            "firstName": "Test",
            "lastName": "User",
            "email": email,
            "password": "secret123",
            "userType": user_type,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {}", body);
    body["id"].as_i64().expect("register returns id")
}

pub async fn create_course(app: &Router, educator_id: i64, title: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/courses",
        json!({
            "title": title,
            "description": "desc",
            "educatorId": educator_id,
            "duration": "4 weeks",
            "price": 49.9,
            "level": "beginner",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create course failed: {}", body);
    body["id"].as_i64().expect("create course returns id")
}

pub async fn enroll(app: &Router, user_id: i64, course_id: i64) -> i64 {
    let (status, body) = post(app, "/api/enrollments", json!({ "userId": user_id, "courseId": course_id })).await;
    assert_eq!(status, StatusCode::OK, "enroll failed: {}", body);
    body["id"].as_i64().expect("enroll returns id")
}
