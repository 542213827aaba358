mod common;

use axum::http::StatusCode;
use common::{get, post, put, register, test_app};
use serde_json::json;

async fn login(app: &axum::Router, email: &str, password: &str) -> (StatusCode, serde_json::Value) {
    post(app, "/api/auth/login", json!({ "email": email, "password": password })).await
}

#[tokio::test]
async fn student_can_log_in_right_after_registering() {
    let app = test_app().await;
    let id = register(&app, "ana@example.com", "student").await;

    let (status, user) = login(&app, "ana@example.com", "secret123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["userId"], id);
    assert_eq!(user["userType"], "student");
    assert_eq!(user["isApproved"], true);
    assert!(user.get("passwordHash").is_none());
}

#[tokio::test]
async fn educator_needs_approval_before_login() {
    let app = test_app().await;
    let id = register(&app, "prof@example.com", "educator").await;

    let (_, user) = get(&app, &format!("/api/users/{}", id)).await;
    assert_eq!(user["isApproved"], false);

    let (status, body) = login(&app, "prof@example.com", "secret123").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Account not approved");

    let (status, _) = put(&app, &format!("/api/users/{}/approve", id), json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, user) = get(&app, &format!("/api/users/{}", id)).await;
    assert_eq!(user["isApproved"], true);
    assert_eq!(user["isActive"], true);

    let (status, user) = login(&app, "prof@example.com", "secret123").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["userType"], "educator");
}

#[tokio::test]
async fn legacy_approve_route_only_targets_educators() {
    let app = test_app().await;
    let student = register(&app, "s@example.com", "student").await;
    let educator = register(&app, "e@example.com", "educator").await;

    let (status, _) = post(&app, &format!("/api/users/approve/{}", student), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = post(&app, &format!("/api/users/approve/{}", educator), json!({})).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn wrong_password_and_unknown_email_are_invalid_credentials() {
    let app = test_app().await;
    register(&app, "ana@example.com", "student").await;

    let (status, body) = login(&app, "ana@example.com", "nope").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, body) = login(&app, "ghost@example.com", "secret123").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn login_email_is_case_insensitive() {
    let app = test_app().await;
    register(&app, "Ana@Example.com", "student").await;

    let (status, _) = login(&app, "ana@example.com", "secret123").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn register_rejects_missing_fields_and_unknown_type() {
    let app = test_app().await;

    let (status, body) = post(&app, "/api/auth/register", json!({ "email": "a@b.c", "password": "x" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input");

    let (status, _) = post(
        &app,
        "/api/auth/register",
        json!({ "email": "a@b.c", "password": "x", "userType": "wizard" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_email_is_rejected_regardless_of_case() {
    let app = test_app().await;
    register(&app, "ana@example.com", "student").await;

    let (status, body) = post(
        &app,
        "/api/users/register",
        json!({ "email": "ANA@example.com", "password": "x", "userType": "student" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already exists.");
}

#[tokio::test]
async fn pascal_case_bodies_are_accepted() {
    let app = test_app().await;
    let (status, _) = post(
        &app,
        "/api/auth/register",
        json!({ "FirstName": "Ana", "Email": "ana@example.com", "Password": "pw", "UserType": "student" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, user) = post(&app, "/api/auth/login", json!({ "Email": "ana@example.com", "Password": "pw" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["firstName"], "Ana");
}

#[tokio::test]
async fn deactivated_account_cannot_log_in() {
    let app = test_app().await;
    let id = register(&app, "ana@example.com", "student").await;

    let (status, _) = put(&app, &format!("/api/users/{}/status", id), json!({ "isActive": false })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = login(&app, "ana@example.com", "secret123").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Account is deactivated");

    let (status, _) = post(&app, &format!("/api/users/{}/activate", id), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = login(&app, "ana@example.com", "secret123").await;
    assert_eq!(status, StatusCode::OK);
}
