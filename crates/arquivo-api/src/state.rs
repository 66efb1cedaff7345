//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use arquivo_core::config::AppConfig;
use arquivo_core::traits::storage::ObjectStore;
use arquivo_database::repositories::file::FileRepository;
use arquivo_database::repositories::folder::FolderRepository;
use arquivo_database::repositories::user::UserRepository;
use arquivo_service::file::service::FileService;
use arquivo_service::file::upload::UploadService;
use arquivo_service::folder::service::FolderService;
use arquivo_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; the storage handle is
/// constructed once at startup and injected here rather than living in a
/// process-wide singleton.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Blob store.
    pub object_store: Arc<dyn ObjectStore>,

    /// Folder repository.
    pub folder_repo: Arc<FolderRepository>,
    /// File repository.
    pub file_repo: Arc<FileRepository>,
    /// User repository.
    pub user_repo: Arc<UserRepository>,

    /// Folder service.
    pub folder_service: Arc<FolderService>,
    /// File service.
    pub file_service: Arc<FileService>,
    /// Upload service.
    pub upload_service: Arc<UploadService>,
    /// User service.
    pub user_service: Arc<UserService>,
}
