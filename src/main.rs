//! Arquivo server — personal file-manager backend.
//!
//! Main entry point: loads configuration, initializes logging, connects to
//! PostgreSQL, runs migrations, and starts the HTTP server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use arquivo_core::config::AppConfig;
use arquivo_core::error::AppError;
use arquivo_database::DatabasePool;
use arquivo_database::migration::run_migrations;
use arquivo_storage::LocalObjectStore;

#[tokio::main]
async fn main() {
    let env = std::env::var("ARQUIVO_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;

    let object_store = Arc::new(LocalObjectStore::new(&config.storage).await?);

    let state = arquivo_api::app::build_state(config, db.into_pool(), object_store);
    arquivo_api::app::run_server(state).await
}
