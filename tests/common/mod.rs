// Shared helpers for driving the router in-process over an in-memory store

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use fake::{faker::internet::en::Username, Fake};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

use exercise_tracker::api::create_routes;
use exercise_tracker::config::StaticConfig;
use exercise_tracker::store::MemoryStore;

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let static_files = StaticConfig {
            public_dir: manifest_dir.join("public"),
            index_file: manifest_dir.join("views/index.html"),
        };

        Self {
            router: create_routes(Arc::new(MemoryStore::new()), &static_files),
        }
    }

    pub async fn raw(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn json(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, bytes) = self.raw(request).await;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.json(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.json(request).await
    }

    /// Post `body` verbatim with a JSON content type.
    pub async fn post_raw_json(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.json(request).await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        self.json(request).await
    }

    /// Create a user and return its id.
    pub async fn create_user(&self, username: &str) -> String {
        let (status, body) = self
            .post_json("/api/users", serde_json::json!({ "username": username }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["_id"].as_str().unwrap().to_string()
    }

    /// Add an exercise dated `date` and assert it was accepted.
    pub async fn add_exercise(&self, user_id: &str, description: &str, duration: i64, date: &str) {
        let (status, _) = self
            .post_json(
                &format!("/api/users/{}/exercises", user_id),
                serde_json::json!({
                    "description": description,
                    "duration": duration,
                    "date": date,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }
}

/// Mock data generators
pub struct MockDataGenerator;

impl MockDataGenerator {
    pub fn username() -> String {
        Username().fake()
    }
}
