//! Integration tests for the tree read and the service probes.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use serde_json::json;

use foldertree_core::error::AppError;
use foldertree_core::result::AppResult;
use foldertree_core::traits::Repository;
use foldertree_database::{FolderStore, MemoryStore, StoreManager};
use foldertree_entity::folder::{CreateFolder, Folder};

#[tokio::test]
async fn test_empty_store_returns_empty_array() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/folders", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_tree_shape() {
    let app = helpers::TestApp::new();
    let docs = app.create_folder("Documents", None).await;
    let invoices = app.create_folder("Invoices", Some(docs)).await;
    let jan = app.create_file("jan.pdf", invoices).await;
    let notes = app.create_file("notes.txt", docs).await;

    let response = app.request("GET", "/api/folders", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let root = &response.body[0];
    assert_eq!(root["id"], docs);
    assert_eq!(root["name"], "Documents");
    assert!(root["parent_folder_id"].is_null());
    assert_eq!(root["files"][0]["id"], notes);

    let child = &root["children"][0];
    assert_eq!(child["id"], invoices);
    assert_eq!(child["parent_folder_id"], docs);
    assert_eq!(child["files"][0]["id"], jan);
    assert!(child.get("children").is_none());
}

#[tokio::test]
async fn test_one_node_per_root_ascending() {
    let app = helpers::TestApp::new();
    let a = app.create_folder("a", None).await;
    let b = app.create_folder("b", None).await;
    app.create_folder("b1", Some(b)).await;
    let c = app.create_folder("c", None).await;

    let ids: Vec<i64> = app
        .tree()
        .await
        .iter()
        .map(|n| n["id"].as_i64().unwrap())
        .collect();

    assert_eq!(ids, vec![a, b, c]);
}

#[tokio::test]
async fn test_grandchildren_are_not_included() {
    let app = helpers::TestApp::new();
    let root = app.create_folder("root", None).await;
    let child = app.create_folder("child", Some(root)).await;
    let grandchild = app.create_folder("grandchild", Some(child)).await;
    app.create_file("deep.txt", grandchild).await;

    let response = app.request("GET", "/api/folders", None).await;

    assert!(!response.text.contains("grandchild"));
    assert!(!response.text.contains("deep.txt"));
    assert_eq!(response.body[0]["children"][0]["files"], json!([]));
}

#[tokio::test]
async fn test_mutation_round_trip() {
    let app = helpers::TestApp::new();
    let id = app.create_folder("first", None).await;
    assert_eq!(app.tree().await[0]["name"], "first");

    app.request(
        "PUT",
        &format!("/api/folders/{id}"),
        Some(json!({ "name": "second" })),
    )
    .await;
    assert_eq!(app.tree().await[0]["name"], "second");

    app.request("DELETE", &format!("/api/folders/{id}"), None)
        .await;
    assert!(app.tree().await.is_empty());
}

#[derive(Debug)]
struct BrokenFolders;

#[async_trait]
impl Repository<Folder, i64> for BrokenFolders {
    async fn find_by_id(&self, _id: &i64) -> AppResult<Option<Folder>> {
        Err(AppError::database("connection refused"))
    }

    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        Err(AppError::database("connection refused"))
    }

    async fn delete(&self, _id: &i64) -> AppResult<bool> {
        Err(AppError::database("connection refused"))
    }

    async fn count(&self) -> AppResult<u64> {
        Err(AppError::database("connection refused"))
    }
}

#[async_trait]
impl FolderStore for BrokenFolders {
    async fn find_roots(&self) -> AppResult<Vec<Folder>> {
        Err(AppError::database("connection refused"))
    }

    async fn find_children(&self, _parent_id: i64) -> AppResult<Vec<Folder>> {
        Err(AppError::database("connection refused"))
    }

    async fn create(&self, _data: &CreateFolder) -> AppResult<Folder> {
        Err(AppError::database("connection refused"))
    }

    async fn rename(&self, _id: i64, _name: &str) -> AppResult<Folder> {
        Err(AppError::database("connection refused"))
    }
}

#[tokio::test]
async fn test_store_failure_returns_fetch_error() {
    let memory = MemoryStore::new();
    let stores = StoreManager::from_stores(Arc::new(BrokenFolders), Arc::new(memory.files()));
    let router = helpers::TestApp::router_for(stores);

    let response = helpers::send(&router, "GET", "/api/folders", "").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");
    assert_eq!(response.body["message"], "Failed to fetch folders");
    assert!(!response.text.contains("connection refused"));
}

#[tokio::test]
async fn test_root_liveness_text() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "Server is running!");
}

#[tokio::test]
async fn test_health_reports_store() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "connected");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/nope", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
