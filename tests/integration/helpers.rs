//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use foldertree_api::{AppState, build_app};
use foldertree_core::config::{AppConfig, DatabaseConfig};
use foldertree_database::{MemoryStore, StoreManager};

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Backing tables, for direct inspection
    pub store: MemoryStore,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let router = Self::router_for(StoreManager::memory(store.clone()));
        Self { router, store }
    }

    /// Build the full app around an arbitrary store manager
    pub fn router_for(stores: StoreManager) -> Router {
        let config = AppConfig {
            database: DatabaseConfig::memory(),
            ..AppConfig::default()
        };
        build_app(AppState::new(config, stores))
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, &body_str).await
    }

    /// Make a request with a verbatim body
    pub async fn raw_request(&self, method: &str, path: &str, body: &str) -> TestResponse {
        send(&self.router, method, path, body).await
    }

    /// POST a folder and return its id
    pub async fn create_folder(&self, name: &str, parent: Option<i64>) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/folders",
                Some(json!({ "name": name, "parent_folder_id": parent })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Folder create failed: {:?}",
            response.body
        );
        response.id()
    }

    /// POST a file and return its id
    pub async fn create_file(&self, name: &str, folder_id: i64) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/files",
                Some(json!({ "name": name, "folderId": folder_id })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "File create failed: {:?}",
            response.body
        );
        response.id()
    }

    /// GET the assembled tree
    pub async fn tree(&self) -> Vec<Value> {
        let response = self.request("GET", "/api/folders", None).await;
        assert_eq!(response.status, StatusCode::OK);
        response
            .body
            .as_array()
            .cloned()
            .expect("Tree response is not an array")
    }
}

/// Send one request through `router`
pub async fn send(router: &Router, method: &str, path: &str, body: &str) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");

    let text = String::from_utf8_lossy(&body_bytes).to_string();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    TestResponse { status, body, text }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty or not JSON)
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestResponse {
    /// The `id` field of a created or updated row
    pub fn id(&self) -> i64 {
        self.body["id"].as_i64().expect("Response has no id")
    }

    /// The `error` code of an error body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
