//! Application builder — wires repositories, services, and state into an
//! Axum app and runs it.

use std::sync::Arc;

use sqlx::PgPool;

use arquivo_core::config::AppConfig;
use arquivo_core::error::AppError;
use arquivo_core::traits::storage::ObjectStore;
use arquivo_database::repositories::folder::FolderStore;
use arquivo_database::repositories::file::FileRepository;
use arquivo_database::repositories::folder::FolderRepository;
use arquivo_database::repositories::user::UserRepository;
use arquivo_service::file::service::FileService;
use arquivo_service::file::upload::UploadService;
use arquivo_service::folder::service::FolderService;
use arquivo_service::seed::Seeder;
use arquivo_service::user::service::UserService;

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state from its infrastructure handles.
pub fn build_state(
    config: AppConfig,
    db_pool: PgPool,
    object_store: Arc<dyn ObjectStore>,
) -> AppState {
    let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));
    let file_repo = Arc::new(FileRepository::new(db_pool.clone()));
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));

    let folder_store: Arc<dyn FolderStore> = Arc::clone(&folder_repo) as Arc<dyn FolderStore>;

    let folder_service = Arc::new(FolderService::new(Arc::clone(&folder_store)));
    let file_service = Arc::new(FileService::new(
        Arc::clone(&file_repo),
        Arc::clone(&folder_store),
    ));
    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&file_repo),
        Arc::clone(&folder_store),
        Arc::clone(&object_store),
        config.storage.clone(),
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));

    AppState {
        config: Arc::new(config),
        db_pool,
        object_store,
        folder_repo,
        file_repo,
        user_repo,
        folder_service,
        file_service,
        upload_service,
        user_service,
    }
}

/// Run the Arquivo server: seed, bind, and serve until shutdown.
pub async fn run_server(state: AppState) -> Result<(), AppError> {
    let seeder = Seeder::new(
        Arc::clone(&state.user_repo),
        Arc::clone(&state.folder_repo) as Arc<dyn FolderStore>,
        state.config.seed.clone(),
    );
    seeder.run().await?;

    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Arquivo server listening on {}", addr);

    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
    tracing::info!("Shutdown signal received");
}
