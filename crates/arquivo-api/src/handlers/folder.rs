//! Folder tree and create handlers.

use axum::Json;
use axum::extract::{Query, State};
use validator::Validate;

use arquivo_core::error::AppError;
use arquivo_entity::folder::{Folder, FolderNode};
use arquivo_service::folder::service::CreateFolderRequest as SvcCreateFolder;

use crate::dto::request::{CreateFolderRequest, FolderTreeQuery};
use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/folders?userId=...
///
/// Returns the complete nested folder tree for the user: the flat collection
/// re-materialized on every read.
pub async fn get_tree(
    State(state): State<AppState>,
    Query(query): Query<FolderTreeQuery>,
) -> Result<Json<ApiResponse<Vec<FolderNode>>>, AppError> {
    let user_id = query
        .user_id
        .ok_or_else(|| AppError::validation("userId query parameter is required"))?;

    let tree = state.folder_service.get_tree(user_id).await?;
    Ok(Json(ApiResponse::ok(tree)))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<ApiResponse<Folder>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .create_folder(SvcCreateFolder {
            name: req.name,
            user_id: req.user_id,
            parent_key: req.parent_key,
        })
        .await?;

    Ok(Json(ApiResponse::ok(folder)))
}
