mod common;

use axum::http::StatusCode;
use common::{get, post, test_app};
use serde_json::json;

#[tokio::test]
async fn submitted_messages_are_listed_newest_first() {
    let app = test_app().await;
    for subject in ["Primeira", "Segunda"] {
        let (status, body) = post(
            &app,
            "/api/contact",
            json!({ "name": "Ana", "email": "ana@example.com", "subject": subject, "message": "Olá" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["id"].is_i64());
    }

    let (status, messages) = get(&app, "/api/contact").await;
    assert_eq!(status, StatusCode::OK);
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["subject"], "Segunda");
    assert_eq!(messages[1]["name"], "Ana");
}

#[tokio::test]
async fn contact_requires_every_field() {
    let app = test_app().await;
    let (status, body) = post(
        &app,
        "/api/contact",
        json!({ "name": "Ana", "email": "ana@example.com", "subject": "  ", "message": "Olá" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name, email, subject and message are required");

    let (_, messages) = get(&app, "/api/contact").await;
    assert!(messages.as_array().unwrap().is_empty());
}
