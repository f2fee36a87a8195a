//! Artifact CRUD integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::common::{artifact_payload, TestApp};

mod test_create_artifact {
    use super::*;

    #[tokio::test]
    async fn test_create_returns_201_with_id() {
        let app = TestApp::new();

        let (status, body) = app
            .send(Method::POST, "/api/artifacts", Some(artifact_payload("amphora")))
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Artifact created");
        assert!(body["id"].as_str().unwrap().parse::<Uuid>().is_ok());
    }

    #[tokio::test]
    async fn test_create_ignores_client_like_state() {
        let app = TestApp::new();
        let mut payload = artifact_payload("krater");
        payload["likeCount"] = json!(500);
        payload["likedBy"] = json!(["a@x.com", "b@x.com"]);

        let id = app.create_artifact_with(payload).await;
        let artifact = app.get_artifact(id).await;

        assert_eq!(artifact["likeCount"], 0);
        assert_eq!(artifact["likedBy"], json!([]));
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_type() {
        let app = TestApp::new();
        let mut payload = artifact_payload("ring");
        payload["type"] = json!("Jewelry");

        let (status, _) = app
            .send(Method::POST, "/api/artifacts", Some(payload))
            .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_image() {
        let app = TestApp::new();
        let mut payload = artifact_payload("ring");
        payload["image"] = json!("not a url");

        let (status, body) = app
            .send(Method::POST, "/api/artifacts", Some(payload))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("Validation failed"));
    }

    #[tokio::test]
    async fn test_create_accepts_every_type() {
        let app = TestApp::new();
        for kind in [
            "Tools",
            "Weapons",
            "Inscription",
            "Pottery",
            "Recording Device",
            "Sculpture",
        ] {
            let mut payload = artifact_payload("item");
            payload["type"] = json!(kind);
            let id = app.create_artifact_with(payload).await;
            assert_eq!(app.get_artifact(id).await["type"], kind);
        }
    }
}

mod test_list_artifacts {
    use super::*;

    #[tokio::test]
    async fn test_list_returns_all_in_insertion_order() {
        let app = TestApp::new();
        for name in ["first", "second", "third"] {
            app.create_artifact(name).await;
        }

        let (status, body) = app.send(Method::GET, "/api/artifacts", None).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_list_by_adder_email() {
        let app = TestApp::new();
        let mut mine = artifact_payload("mine");
        mine["adderEmail"] = json!("curator@museum.test");
        app.create_artifact_with(mine).await;
        app.create_artifact("theirs").await;

        let (_, body) = app
            .send(Method::GET, "/api/artifacts?email=curator@museum.test", None)
            .await;
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["name"], "mine");
        assert_eq!(list[0]["adderEmail"], "curator@museum.test");
    }

    #[tokio::test]
    async fn test_blank_email_filter_lists_everything() {
        let app = TestApp::new();
        let mut mine = artifact_payload("mine");
        mine["adderEmail"] = json!("curator@museum.test");
        app.create_artifact_with(mine).await;
        app.create_artifact("theirs").await;

        let (status, body) = app.send(Method::GET, "/api/artifacts?email=%20", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_featured_returns_top_six_sorted() {
        let app = TestApp::new();
        let mut ids = Vec::new();
        for i in 0..10 {
            ids.push(app.create_artifact(&format!("item{}", i)).await);
        }
        for (i, id) in ids.iter().enumerate() {
            for n in 0..i {
                let (status, _) = app.like(*id, &format!("v{}@museum.test", n)).await;
                assert_eq!(status, StatusCode::OK);
            }
        }

        let (status, body) = app
            .send(Method::GET, "/api/artifacts?featured=true", None)
            .await;
        assert_eq!(status, StatusCode::OK);
        let counts: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["likeCount"].as_i64().unwrap())
            .collect();
        assert_eq!(counts, vec![9, 8, 7, 6, 5, 4]);
    }

    #[tokio::test]
    async fn test_featured_ignores_email_filter() {
        let app = TestApp::new();
        app.create_artifact("a").await;
        app.create_artifact("b").await;

        let (_, body) = app
            .send(
                Method::GET,
                "/api/artifacts?featured=true&email=nobody@museum.test",
                None,
            )
            .await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_catalog_lists_empty() {
        let app = TestApp::new();
        let (status, body) = app.send(Method::GET, "/api/artifacts", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}

mod test_random_artifact {
    use super::*;

    #[tokio::test]
    async fn test_random_on_empty_catalog_is_404() {
        let app = TestApp::new();
        let (status, body) = app.send(Method::GET, "/api/artifacts/random", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "No artifacts found");
    }

    #[tokio::test]
    async fn test_random_returns_existing_artifact() {
        let app = TestApp::new();
        let ids = [
            app.create_artifact("a").await,
            app.create_artifact("b").await,
            app.create_artifact("c").await,
        ];

        for _ in 0..10 {
            let (status, body) = app.send(Method::GET, "/api/artifacts/random", None).await;
            assert_eq!(status, StatusCode::OK);
            let id: Uuid = body["_id"].as_str().unwrap().parse().unwrap();
            assert!(ids.contains(&id));
        }
    }
}

mod test_get_artifact {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_document() {
        let app = TestApp::new();
        let id = app.create_artifact("adze").await;

        let body = app.get_artifact(id).await;
        assert_eq!(body["_id"], id.to_string());
        assert_eq!(body["name"], "adze");
        assert!(body.get("description").is_none());
    }

    #[tokio::test]
    async fn test_get_missing_is_404() {
        let app = TestApp::new();
        let (status, body) = app
            .send(Method::GET, &format!("/api/artifacts/{}", Uuid::new_v4()), None)
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Artifact not found");
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_400() {
        let app = TestApp::new();
        let (status, body) = app.send(Method::GET, "/api/artifacts/xyz", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid artifact ID");
    }
}

mod test_update_artifact {
    use super::*;

    #[tokio::test]
    async fn test_update_changes_content_fields() {
        let app = TestApp::new();
        let id = app.create_artifact("adze").await;

        let (status, body) = app
            .send(
                Method::PUT,
                &format!("/api/artifacts/{}", id),
                Some(json!({ "description": "Polished stone adze", "type": "Tools" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Artifact updated");

        let stored = app.get_artifact(id).await;
        assert_eq!(stored["description"], "Polished stone adze");
        assert_eq!(stored["type"], "Tools");
        assert_eq!(stored["name"], "adze");
    }

    #[tokio::test]
    async fn test_update_cannot_touch_like_state() {
        let app = TestApp::new();
        let id = app.create_artifact("adze").await;
        app.like(id, "fan@museum.test").await;

        let (status, _) = app
            .send(
                Method::PUT,
                &format!("/api/artifacts/{}", id),
                Some(json!({
                    "likeCount": 999,
                    "likedBy": ["intruder@x.com"],
                    "adderEmail": "intruder@x.com",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        let stored = app.get_artifact(id).await;
        assert_eq!(stored["likeCount"], 1);
        assert_eq!(stored["likedBy"], json!(["fan@museum.test"]));
        assert!(stored.get("adderEmail").is_none());
    }

    #[tokio::test]
    async fn test_update_rejects_empty_name() {
        let app = TestApp::new();
        let id = app.create_artifact("adze").await;

        let (status, _) = app
            .send(
                Method::PUT,
                &format!("/api/artifacts/{}", id),
                Some(json!({ "name": "" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(app.get_artifact(id).await["name"], "adze");
    }

    #[tokio::test]
    async fn test_update_missing_is_404() {
        let app = TestApp::new();
        let (status, body) = app
            .send(
                Method::PUT,
                &format!("/api/artifacts/{}", Uuid::new_v4()),
                Some(json!({ "name": "ghost" })),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Artifact not found");
    }

    #[tokio::test]
    async fn test_update_malformed_id_is_400() {
        let app = TestApp::new();
        let (status, body) = app
            .send(
                Method::PUT,
                "/api/artifacts/123",
                Some(json!({ "name": "ghost" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid artifact ID");
    }
}

mod test_delete_artifact {
    use super::*;

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let app = TestApp::new();
        let id = app.create_artifact("adze").await;
        let uri = format!("/api/artifacts/{}", id);

        let (status, body) = app.send(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Artifact deleted");

        let (status, _) = app.send(Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = app.send(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_malformed_id_is_400() {
        let app = TestApp::new();
        let (status, _) = app.send(Method::DELETE, "/api/artifacts/nope", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
