//! Integration tests for file endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use foldertree_core::traits::Repository;

#[tokio::test]
async fn test_create_file() {
    let app = helpers::TestApp::new();
    let folder = app.create_folder("root", None).await;

    let response = app
        .request(
            "POST",
            "/api/files",
            Some(json!({ "name": "report.pdf", "folderId": folder })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "report.pdf");
    assert_eq!(response.body["folder_id"], folder);
}

#[tokio::test]
async fn test_rename_file_to_padded_full_length_name() {
    let app = helpers::TestApp::new();
    let folder = app.create_folder("root", None).await;
    let id = app.create_file("draft.txt", folder).await;
    let longest = "f".repeat(255);

    let response = app
        .request(
            "PUT",
            &format!("/api/files/{id}"),
            Some(json!({ "name": format!("\t{longest} ") })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], longest.as_str());
}

#[tokio::test]
async fn test_create_file_accepts_snake_case_folder() {
    let app = helpers::TestApp::new();
    let folder = app.create_folder("root", None).await;

    let response = app
        .request(
            "POST",
            "/api/files",
            Some(json!({ "name": "a.txt", "folder_id": folder })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_file_requires_fields() {
    let app = helpers::TestApp::new();
    let folder = app.create_folder("root", None).await;

    for body in [
        json!({ "folderId": folder }),
        json!({ "name": "a.txt" }),
        json!({ "name": "", "folderId": folder }),
        json!({ "name": "a.txt", "folderId": "one" }),
    ] {
        let response = app.request("POST", "/api/files", Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_create_file_in_missing_folder_is_server_error() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/files",
            Some(json!({ "name": "a.txt", "folderId": 999 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error_code(), "INTERNAL_ERROR");
    assert_eq!(app.store.files().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_rename_file_keeps_folder() {
    let app = helpers::TestApp::new();
    let folder = app.create_folder("root", None).await;
    let id = app.create_file("draft.txt", folder).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/files/{id}"),
            Some(json!({ "name": "final.txt" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "final.txt");
    assert_eq!(response.body["folder_id"], folder);
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .request("PUT", "/api/files/77", Some(json!({ "name": "x" })))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", "/api/files/77", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_file() {
    let app = helpers::TestApp::new();
    let folder = app.create_folder("root", None).await;
    let keep = app.create_file("keep", folder).await;
    let drop = app.create_file("drop", folder).await;

    let response = app
        .request("DELETE", &format!("/api/files/{drop}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let tree = app.tree().await;
    let files = tree[0]["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["id"], keep);
}
