//! File mutation handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use foldertree_entity::file::File;

use crate::dto::request::{CreateFileRequest, RenameRequest};
use crate::error::ApiError;
use crate::extractors::{IdPath, ValidatedJson};
use crate::state::AppState;

/// POST /api/files
pub async fn create_file(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFileRequest>,
) -> Result<(StatusCode, Json<File>), ApiError> {
    let file = state
        .file_service
        .create_file(&req.name, req.folder_id)
        .await?;
    Ok((StatusCode::CREATED, Json(file)))
}

/// PUT /api/files/{id}
pub async fn rename_file(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<RenameRequest>,
) -> Result<Json<File>, ApiError> {
    let file = state.file_service.rename_file(id, &req.name).await?;
    Ok(Json(file))
}

/// DELETE /api/files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, ApiError> {
    state.file_service.delete_file(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
