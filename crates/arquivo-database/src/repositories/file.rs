//! File metadata repository implementation.

use sqlx::PgPool;

use arquivo_core::error::{AppError, ErrorKind};
use arquivo_core::result::AppResult;
use arquivo_entity::file::{CreateFile, File};

/// Repository for file metadata records.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List files belonging to a folder, newest first.
    pub async fn find_by_folder_key(&self, folder_key: &str) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE folder_key = $1 ORDER BY last_modified DESC",
        )
        .bind(folder_key)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// Persist a new file metadata record.
    pub async fn create(&self, data: &CreateFile) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "INSERT INTO files (key, name, mime_type, size_bytes, path, folder_key) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&data.key)
        .bind(&data.name)
        .bind(&data.mime_type)
        .bind(data.size_bytes)
        .bind(&data.path)
        .bind(&data.folder_key)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("files_key_key") => {
                AppError::conflict(format!("File key '{}' already exists", data.key))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create file record", e),
        })
    }
}
