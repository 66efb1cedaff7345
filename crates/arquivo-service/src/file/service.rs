//! File metadata queries.

use std::sync::Arc;

use arquivo_core::error::AppError;
use arquivo_database::repositories::file::FileRepository;
use arquivo_database::repositories::folder::FolderStore;
use arquivo_entity::file::File;

/// Read-side file operations.
#[derive(Debug, Clone)]
pub struct FileService {
    /// File repository.
    file_repo: Arc<FileRepository>,
    /// Folder storage boundary.
    folder_repo: Arc<dyn FolderStore>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(file_repo: Arc<FileRepository>, folder_repo: Arc<dyn FolderStore>) -> Self {
        Self {
            file_repo,
            folder_repo,
        }
    }

    /// List the files in a folder. Fails with not-found when the folder key
    /// is unknown (rather than returning an empty list for garbage keys).
    pub async fn list_files(&self, folder_key: &str) -> Result<Vec<File>, AppError> {
        self.folder_repo
            .find_by_key(folder_key)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Folder '{folder_key}' not found")))?;

        self.file_repo.find_by_folder_key(folder_key).await
    }
}
