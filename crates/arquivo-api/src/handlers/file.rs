//! File listing and upload handlers.

use axum::Json;
use axum::extract::{Multipart, Query, State};

use arquivo_core::error::AppError;
use arquivo_entity::file::File;
use arquivo_service::file::upload::UploadParams;

use crate::dto::request::FileListQuery;
use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/files?folderKey=...
pub async fn list_files(
    State(state): State<AppState>,
    Query(query): Query<FileListQuery>,
) -> Result<Json<ApiResponse<Vec<File>>>, AppError> {
    let folder_key = query
        .folder_key
        .ok_or_else(|| AppError::validation("folderKey query parameter is required"))?;

    let files = state.file_service.list_files(&folder_key).await?;
    Ok(Json(ApiResponse::ok(files)))
}

/// POST /api/files/upload (multipart: `folder_key`, `file`)
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<File>>, AppError> {
    let mut folder_key: Option<String> = None;
    let mut upload: Option<(String, Option<String>, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("folder_key") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Invalid folder_key field: {e}")))?;
                folder_key = Some(value);
            }
            Some("file") => {
                let file_name = field
                    .file_name()
                    .ok_or_else(|| AppError::validation("File field is missing a file name"))?
                    .to_string();
                let mime_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read file field: {e}")))?;
                upload = Some((file_name, mime_type, data));
            }
            _ => {}
        }
    }

    let folder_key =
        folder_key.ok_or_else(|| AppError::validation("folder_key field is required"))?;
    let (file_name, mime_type, data) =
        upload.ok_or_else(|| AppError::validation("No file was sent"))?;

    let file = state
        .upload_service
        .upload(UploadParams {
            folder_key,
            file_name,
            mime_type,
            data,
        })
        .await?;

    Ok(Json(ApiResponse::ok(file)))
}
