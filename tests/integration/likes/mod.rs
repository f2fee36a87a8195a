//! Like/unlike integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::common::TestApp;

#[tokio::test]
async fn test_like_returns_new_state() {
    let app = TestApp::new();
    let id = app.create_artifact("adze").await;

    let (status, body) = app.like(id, "fan@museum.test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "likeCount": 1, "likedBy": ["fan@museum.test"] }));
}

#[tokio::test]
async fn test_double_like_rejected_without_change() {
    let app = TestApp::new();
    let id = app.create_artifact("adze").await;

    app.like(id, "fan@museum.test").await;
    let (status, body) = app.like(id, "fan@museum.test").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User already liked this artifact");

    let stored = app.get_artifact(id).await;
    assert_eq!(stored["likeCount"], 1);
    assert_eq!(stored["likedBy"], json!(["fan@museum.test"]));
}

#[tokio::test]
async fn test_unlike_without_like_rejected() {
    let app = TestApp::new();
    let id = app.create_artifact("adze").await;

    let (status, body) = app.unlike(id, "fan@museum.test").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User has not liked this artifact");

    let stored = app.get_artifact(id).await;
    assert_eq!(stored["likeCount"], 0);
    assert_eq!(stored["likedBy"], json!([]));
}

#[tokio::test]
async fn test_like_then_unlike_restores_state() {
    let app = TestApp::new();
    let id = app.create_artifact("adze").await;
    let before = app.get_artifact(id).await;

    app.like(id, "fan@museum.test").await;
    let (status, body) = app.unlike(id, "fan@museum.test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "likeCount": 0, "likedBy": [] }));

    assert_eq!(app.get_artifact(id).await, before);
}

#[tokio::test]
async fn test_identity_is_trimmed() {
    let app = TestApp::new();
    let id = app.create_artifact("adze").await;

    app.like(id, "  fan@museum.test ").await;
    let (status, _) = app.like(id, "fan@museum.test").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_email_rejected() {
    let app = TestApp::new();
    let id = app.create_artifact("adze").await;

    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/api/artifacts/{}/like", id),
            Some(json!({})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User email is required to like artifact");

    let (status, body) = app.unlike(id, "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User email is required to unlike artifact");
}

#[tokio::test]
async fn test_bodyless_or_non_string_email_rejected() {
    let app = TestApp::new();
    let id = app.create_artifact("adze").await;

    let (status, body) = app
        .send(Method::PATCH, &format!("/api/artifacts/{}/like", id), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User email is required to like artifact");

    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/api/artifacts/{}/unlike", id),
            Some(json!({ "email": 5 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User email is required to unlike artifact");

    let (status, body) = app
        .send(
            Method::PATCH,
            &format!("/api/artifacts/{}/like", id),
            Some(json!({ "email": ["fan@museum.test"] })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User email is required to like artifact");

    let stored = app.get_artifact(id).await;
    assert_eq!(stored["likeCount"], 0);
}

#[tokio::test]
async fn test_like_missing_artifact_is_404() {
    let app = TestApp::new();
    let (status, body) = app.like(Uuid::new_v4(), "fan@museum.test").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Artifact not found");
}

#[tokio::test]
async fn test_like_malformed_id_is_400() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::PATCH,
            "/api/artifacts/not-an-id/like",
            Some(json!({ "email": "fan@museum.test" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid artifact ID");
}

mod test_liked_listing {
    use super::*;

    #[tokio::test]
    async fn test_liked_lists_only_liked_sorted_by_count() {
        let app = TestApp::new();
        let quiet = app.create_artifact("quiet").await;
        let popular = app.create_artifact("popular").await;
        app.create_artifact("ignored").await;

        app.like(quiet, "fan@museum.test").await;
        for who in ["fan@museum.test", "a@museum.test", "b@museum.test"] {
            app.like(popular, who).await;
        }

        let (status, body) = app
            .send(Method::GET, "/api/artifacts/liked?email=fan@museum.test", None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["popular", "quiet"]);
    }

    #[tokio::test]
    async fn test_liked_without_email_is_400() {
        let app = TestApp::new();
        let (status, body) = app.send(Method::GET, "/api/artifacts/liked", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Missing or invalid user email");
    }
}
