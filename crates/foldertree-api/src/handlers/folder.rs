//! Folder tree and folder mutation handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use foldertree_entity::folder::{Folder, FolderNode};

use crate::dto::request::{CreateFolderRequest, RenameRequest};
use crate::error::ApiError;
use crate::extractors::{IdPath, ValidatedJson};
use crate::state::AppState;

/// GET /api/folders
pub async fn get_tree(State(state): State<AppState>) -> Result<Json<Vec<FolderNode>>, ApiError> {
    let tree = state.tree_service.fetch_tree().await?;
    Ok(Json(tree))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFolderRequest>,
) -> Result<(StatusCode, Json<Folder>), ApiError> {
    let folder = state
        .folder_service
        .create_folder(&req.name, req.parent_folder_id)
        .await?;
    Ok((StatusCode::CREATED, Json(folder)))
}

/// PUT /api/folders/{id}
pub async fn rename_folder(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<RenameRequest>,
) -> Result<Json<Folder>, ApiError> {
    let folder = state.folder_service.rename_folder(id, &req.name).await?;
    Ok(Json(folder))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.folder_service.delete_folder(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
