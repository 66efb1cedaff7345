//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use arquivo_core::error::{AppError, ErrorKind};
use arquivo_core::result::AppResult;
use arquivo_entity::folder::{CreateFolder, Folder};

/// Storage boundary for folder records.
///
/// Entity-specific query methods live on this trait so services depend on
/// the boundary rather than on the concrete Postgres-backed repository.
#[async_trait]
pub trait FolderStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch the entire folder collection, ordered by key ascending.
    async fn find_all(&self) -> AppResult<Vec<Folder>>;

    /// Fetch every folder owned by a user, ordered by key ascending.
    async fn find_all_for_user(&self, user_id: Uuid) -> AppResult<Vec<Folder>>;

    /// Find a folder by its key.
    async fn find_by_key(&self, key: &str) -> AppResult<Option<Folder>>;

    /// Count all folder records.
    async fn count(&self) -> AppResult<i64>;

    /// Persist a new folder record. A duplicate key must surface as a
    /// conflict, not as an opaque database error.
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder>;
}

/// Repository for folder records.
///
/// The flat folder collection is the single source of truth; tree views are
/// derived from it at read time. All listing queries order by `key`
/// ascending so hierarchy builds are deterministic.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    /// Key allocation scans this: keys are unique across the whole table,
    /// not per user.
    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders ORDER BY key ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn find_all_for_user(&self, user_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE user_id = $1 ORDER BY key ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn find_by_key(&self, key: &str) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM folders")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count folders", e))
    }

    /// The `folders_key_key` unique constraint is the storage-level guard
    /// against two concurrent creates racing to the same key. A violation
    /// surfaces as a conflict so callers can re-read and retry allocation
    /// instead of failing opaquely.
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (key, name, path, parent_key, user_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.key)
        .bind(&data.name)
        .bind(&data.path)
        .bind(&data.parent_key)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folders_key_key") =>
            {
                AppError::conflict(format!("Folder key '{}' already exists", data.key))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })
    }
}
