//! Integration tests for folder endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use foldertree_core::traits::Repository;
use foldertree_database::FileStore;

#[tokio::test]
async fn test_create_root_folder() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/folders", Some(json!({ "name": "Documents" })))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Documents");
    assert!(response.body["parent_folder_id"].is_null());
    assert!(response.body["created_at"].is_string());
    assert!(response.body["updated_at"].is_string());
}

#[tokio::test]
async fn test_create_child_folder_accepts_camel_case_parent() {
    let app = helpers::TestApp::new();
    let root = app.create_folder("root", None).await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "child", "parentFolderId": root })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["parent_folder_id"], root);
}

#[tokio::test]
async fn test_create_folder_requires_name() {
    let app = helpers::TestApp::new();

    for body in [json!({}), json!({ "name": "" }), json!({ "name": "   " })] {
        let response = app.request("POST", "/api/folders", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error_code(), "VALIDATION_ERROR");
    }
    assert!(app.tree().await.is_empty());
}

#[tokio::test]
async fn test_name_length_is_checked_after_trimming() {
    let app = helpers::TestApp::new();
    let longest = "d".repeat(255);

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": format!("  {longest}  ") })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], longest.as_str());

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "d".repeat(256) })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = helpers::TestApp::new();

    let response = app
        .raw_request("POST", "/api/folders", r#"{"name": "unterminated"#)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_under_missing_parent_is_server_error() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(json!({ "name": "orphan", "parent_folder_id": 404 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error_code(), "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_rename_folder() {
    let app = helpers::TestApp::new();
    let id = app.create_folder("old", None).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/folders/{id}"),
            Some(json!({ "name": "new" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.id(), id);
    assert_eq!(response.body["name"], "new");

    let tree = app.tree().await;
    assert_eq!(tree[0]["name"], "new");
}

#[tokio::test]
async fn test_rename_missing_folder_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .request("PUT", "/api/folders/999", Some(json!({ "name": "x" })))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_non_integer_id_is_bad_request() {
    let app = helpers::TestApp::new();

    let response = app
        .request("PUT", "/api/folders/abc", Some(json!({ "name": "x" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.request("DELETE", "/api/folders/1.5", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_folder_returns_no_content() {
    let app = helpers::TestApp::new();
    let id = app.create_folder("doomed", None).await;

    let response = app
        .request("DELETE", &format!("/api/folders/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.text.is_empty());

    let response = app
        .request("DELETE", &format!("/api/folders/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_folder_keeps_children_and_files_in_storage() {
    let app = helpers::TestApp::new();
    let root = app.create_folder("root", None).await;
    let child = app.create_folder("child", Some(root)).await;
    let file = app.create_file("a.txt", root).await;

    let response = app
        .request("DELETE", &format!("/api/folders/{root}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let folders = app.store.folders();
    let orphan = folders.find_by_id(&child).await.unwrap().unwrap();
    assert_eq!(orphan.parent_folder_id, Some(root));
    let files = app.store.files().find_by_folder(root).await.unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].id, file);

    assert!(app.tree().await.is_empty());
}
