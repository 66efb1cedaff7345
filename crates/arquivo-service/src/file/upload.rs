//! File upload: blob to the object store, metadata to the database.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use arquivo_core::config::storage::StorageConfig;
use arquivo_core::error::AppError;
use arquivo_core::traits::storage::ObjectStore;
use arquivo_database::repositories::file::FileRepository;
use arquivo_database::repositories::folder::FolderStore;
use arquivo_entity::file::{CreateFile, File};

/// Parameters for a single-request upload.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// Key of the folder receiving the file.
    pub folder_key: String,
    /// Original file name.
    pub file_name: String,
    /// MIME type reported by the client.
    pub mime_type: Option<String>,
    /// File content.
    pub data: Bytes,
}

/// Handles uploads end to end: size check, folder resolution, blob write,
/// metadata persistence.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// File repository.
    file_repo: Arc<FileRepository>,
    /// Folder storage boundary.
    folder_repo: Arc<dyn FolderStore>,
    /// Blob store.
    store: Arc<dyn ObjectStore>,
    /// Storage configuration.
    config: StorageConfig,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        file_repo: Arc<FileRepository>,
        folder_repo: Arc<dyn FolderStore>,
        store: Arc<dyn ObjectStore>,
        config: StorageConfig,
    ) -> Self {
        Self {
            file_repo,
            folder_repo,
            store,
            config,
        }
    }

    /// Store a file: blob first, metadata record second. The blob path is
    /// derived from the owning folder's materialized path plus the file
    /// name; the record key is `{folderKey}_{uuid}`.
    pub async fn upload(&self, params: UploadParams) -> Result<File, AppError> {
        if params.file_name.trim().is_empty() {
            return Err(AppError::validation("File name cannot be empty"));
        }
        if params.data.len() as u64 > self.config.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds maximum upload size of {} bytes",
                self.config.max_upload_size_bytes
            )));
        }

        let folder = self
            .folder_repo
            .find_by_key(&params.folder_key)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Folder '{}' not found", params.folder_key))
            })?;

        let blob_path = object_path(&folder.path, &params.file_name);
        self.store.put(&blob_path, params.data.clone()).await?;

        let record = CreateFile {
            key: format!("{}_{}", folder.key, Uuid::new_v4()),
            name: params.file_name.clone(),
            mime_type: params
                .mime_type
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            size_bytes: params.data.len() as i64,
            path: file_path(&folder.path, &params.file_name),
            folder_key: folder.key.clone(),
        };

        let file = self.file_repo.create(&record).await?;

        info!(
            folder_key = %folder.key,
            file_key = %file.key,
            size_bytes = file.size_bytes,
            "File uploaded"
        );

        Ok(file)
    }
}

/// Object-store path for a blob: the folder path without its leading slash,
/// joined with the file name, with any doubled separators collapsed.
fn object_path(folder_path: &str, file_name: &str) -> String {
    let joined = format!("{}/{}", folder_path.trim_start_matches('/'), file_name);
    let mut out = String::with_capacity(joined.len());
    let mut prev_slash = false;
    for c in joined.chars() {
        let slash = c == '/';
        if !(slash && prev_slash) {
            out.push(c);
        }
        prev_slash = slash;
    }
    out.trim_start_matches('/').to_string()
}

/// Full logical path recorded in the file table.
fn file_path(folder_path: &str, file_name: &str) -> String {
    if folder_path == "/" {
        format!("/{file_name}")
    } else {
        format!("{folder_path}/{file_name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_path_strips_leading_slash() {
        assert_eq!(
            object_path("/Documentos/Trabalho", "nota.txt"),
            "Documentos/Trabalho/nota.txt"
        );
    }

    #[test]
    fn test_object_path_for_root_folder() {
        assert_eq!(object_path("/", "manual.pdf"), "manual.pdf");
    }

    #[test]
    fn test_object_path_collapses_doubled_separators() {
        assert_eq!(object_path("/Imagens//2023", "foto.jpg"), "Imagens/2023/foto.jpg");
    }

    #[test]
    fn test_file_path_under_root_has_single_slash() {
        assert_eq!(file_path("/", "manual.pdf"), "/manual.pdf");
        assert_eq!(file_path("/Imagens", "foto.jpg"), "/Imagens/foto.jpg");
    }
}
