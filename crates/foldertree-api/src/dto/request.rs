//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/folders`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, message = "Folder name is required"))]
    pub name: String,
    /// Parent folder; absent or null creates a root.
    #[serde(default, alias = "parentFolderId")]
    pub parent_folder_id: Option<i64>,
}

/// Body of `POST /api/files`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFileRequest {
    /// File name.
    #[validate(length(min = 1, message = "File name is required"))]
    pub name: String,
    /// Containing folder.
    #[serde(rename = "folderId", alias = "folder_id")]
    pub folder_id: i64,
}

/// Body of the `PUT` rename endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RenameRequest {
    /// New name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}
