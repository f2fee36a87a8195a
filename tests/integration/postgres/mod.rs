//! Postgres-backed tests
//!
//! Ignored by default. Run with a disposable database:
//! `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_postgres_like_round_trip() {
    let app = TestApp::postgres().await.unwrap();
    let id = app.create_artifact("pg-amphora").await;

    let (status, body) = app.like(id, "fan@museum.test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "likeCount": 1, "likedBy": ["fan@museum.test"] }));

    let (status, _) = app.like(id, "fan@museum.test").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.unlike(id, "fan@museum.test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "likeCount": 0, "likedBy": [] }));

    app.send(Method::DELETE, &format!("/api/artifacts/{}", id), None)
        .await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_postgres_concurrent_likes_keep_invariant() {
    let app = std::sync::Arc::new(TestApp::postgres().await.unwrap());
    let id = app.create_artifact("pg-krater").await;

    let mut handles = Vec::new();
    for i in 0..24 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let who = format!("visitor{}@museum.test", i % 6);
            app.like(id, &who).await.0
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let artifact = app.get_artifact(id).await;
    assert_eq!(artifact["likeCount"], 6);
    assert_eq!(artifact["likedBy"].as_array().unwrap().len(), 6);

    app.send(Method::DELETE, &format!("/api/artifacts/{}", id), None)
        .await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_postgres_update_leaves_like_state() {
    let app = TestApp::postgres().await.unwrap();
    let id = app.create_artifact("pg-adze").await;
    app.like(id, "fan@museum.test").await;

    let (status, _) = app
        .send(
            Method::PUT,
            &format!("/api/artifacts/{}", id),
            Some(json!({ "likeCount": 999, "location": "Vault 7" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let artifact = app.get_artifact(id).await;
    assert_eq!(artifact["likeCount"], 1);
    assert_eq!(artifact["location"], "Vault 7");

    app.send(Method::DELETE, &format!("/api/artifacts/{}", id), None)
        .await;
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_postgres_unlike_heals_duplicate_likers() {
    let app = TestApp::postgres().await.unwrap();
    let pool = app.pool.clone().unwrap();
    let id = app.create_artifact("pg-stele").await;

    // Legacy rows may carry the same liker more than once
    sqlx::query(
        "UPDATE artifacts SET liked_by = ARRAY['dup@museum.test', 'dup@museum.test', 'other@museum.test'], \
         like_count = 3 WHERE id = $1",
    )
    .bind(id)
    .execute(&pool)
    .await
    .unwrap();

    let (status, body) = app.unlike(id, "dup@museum.test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "likeCount": 1, "likedBy": ["other@museum.test"] }));

    let (like_count, liked_by): (i32, Vec<String>) =
        sqlx::query_as("SELECT like_count, liked_by FROM artifacts WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(like_count as usize, liked_by.len());

    let (status, body) = app.like(id, "dup@museum.test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["likeCount"], 2);

    app.send(Method::DELETE, &format!("/api/artifacts/{}", id), None)
        .await;
}
