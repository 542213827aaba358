mod common;

use axum::http::StatusCode;
use common::{delete, get, post, put, register, test_app};
use serde_json::json;

#[tokio::test]
async fn list_and_fetch_users() {
    let app = test_app().await;
    let a = register(&app, "a@example.com", "student").await;
    let b = register(&app, "b@example.com", "educator").await;

    let (status, users) = get(&app, "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = users.as_array().unwrap().iter().map(|u| u["userId"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![a, b]);

    let (status, _) = get(&app, "/api/users/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_creation_can_preapprove() {
    let app = test_app().await;
    let (status, body) = post(
        &app,
        "/api/users",
        json!({ "email": "boss@example.com", "password": "pw", "userType": "admin", "isApproved": true }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, user) = get(&app, &format!("/api/users/{}", body["id"])).await;
    assert_eq!(user["userType"], "admin");
    assert_eq!(user["isApproved"], true);
}

#[tokio::test]
async fn public_registration_ignores_approval_flag() {
    let app = test_app().await;
    let (_, body) = post(
        &app,
        "/api/auth/register",
        json!({ "email": "sneaky@example.com", "password": "pw", "userType": "educator", "isApproved": true }),
    )
    .await;

    let (_, user) = get(&app, &format!("/api/users/{}", body["id"])).await;
    assert_eq!(user["isApproved"], false);
}

#[tokio::test]
async fn profile_update_overwrites_names_and_bio() {
    let app = test_app().await;
    let id = register(&app, "a@example.com", "student").await;

    let (status, _) = put(
        &app,
        &format!("/api/users/{}", id),
        json!({ "firstName": "Ana", "lastName": "Silva", "bio": "Gosto de Rust" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, user) = get(&app, &format!("/api/users/{}", id)).await;
    assert_eq!(user["firstName"], "Ana");
    assert_eq!(user["lastName"], "Silva");
    assert_eq!(user["bio"], "Gosto de Rust");

    let (status, _) = put(&app, "/api/users/999", json!({ "firstName": "X", "lastName": "Y" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn check_email_reports_existence() {
    let app = test_app().await;
    register(&app, "a@example.com", "student").await;

    let (status, body) = get(&app, "/api/users/check-email?email=A%40example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exists"], true);

    let (_, body) = get(&app, "/api/users/check-email?email=b%40example.com").await;
    assert_eq!(body["exists"], false);

    let (status, _) = get(&app, "/api/users/check-email").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejected_educator_becomes_student() {
    let app = test_app().await;
    let id = register(&app, "e@example.com", "educator").await;

    let (status, _) = put(&app, &format!("/api/users/{}/reject", id), json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, user) = get(&app, &format!("/api/users/{}", id)).await;
    assert_eq!(user["userType"], "student");
    assert_eq!(user["isApproved"], true);

    // Já não é educador
    let (status, _) = put(&app, &format!("/api/users/{}/reject", id), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_user_then_missing() {
    let app = test_app().await;
    let id = register(&app, "a@example.com", "student").await;

    let (status, _) = delete(&app, &format!("/api/users/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = delete(&app, &format!("/api/users/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app, &format!("/api/users/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
