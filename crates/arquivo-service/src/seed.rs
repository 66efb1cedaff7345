//! First-run seeding: a default user plus the base folder structure.
//!
//! Idempotent — the user is created only if the configured email is unknown,
//! and folders only when the folder table is empty.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use arquivo_core::config::seed::SeedConfig;
use arquivo_core::error::AppError;
use arquivo_database::repositories::folder::FolderStore;
use arquivo_database::repositories::user::UserRepository;
use arquivo_entity::folder::{CreateFolder, ROOT_KEY};
use arquivo_entity::user::CreateUser;

/// Seeds the default user and base folders at startup.
#[derive(Debug, Clone)]
pub struct Seeder {
    user_repo: Arc<UserRepository>,
    folder_repo: Arc<dyn FolderStore>,
    config: SeedConfig,
}

impl Seeder {
    /// Creates a new seeder.
    pub fn new(
        user_repo: Arc<UserRepository>,
        folder_repo: Arc<dyn FolderStore>,
        config: SeedConfig,
    ) -> Self {
        Self {
            user_repo,
            folder_repo,
            config,
        }
    }

    /// Run the seed. Safe to call on every startup.
    pub async fn run(&self) -> Result<(), AppError> {
        if !self.config.enabled {
            return Ok(());
        }

        let user_id = self.ensure_user().await?;
        self.ensure_base_folders(user_id).await?;
        Ok(())
    }

    async fn ensure_user(&self) -> Result<Uuid, AppError> {
        if let Some(user) = self.user_repo.find_by_email(&self.config.admin_email).await? {
            return Ok(user.id);
        }

        let user = self
            .user_repo
            .create(&CreateUser {
                name: self.config.admin_name.clone(),
                email: self.config.admin_email.clone(),
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "Seeded default user");
        Ok(user.id)
    }

    /// Root folder `"0"` plus the three top-level folders the UI expects on
    /// first run: Documentos, Imagens, Downloads.
    async fn ensure_base_folders(&self, user_id: Uuid) -> Result<(), AppError> {
        if self.folder_repo.count().await? > 0 {
            return Ok(());
        }

        self.folder_repo
            .create(&CreateFolder {
                key: ROOT_KEY.to_string(),
                name: "ROOT".to_string(),
                path: "/".to_string(),
                parent_key: None,
                user_id,
            })
            .await?;

        for (key, name) in [("1", "Documentos"), ("2", "Imagens"), ("3", "Downloads")] {
            self.folder_repo
                .create(&CreateFolder {
                    key: key.to_string(),
                    name: name.to_string(),
                    path: format!("/{name}"),
                    parent_key: Some(ROOT_KEY.to_string()),
                    user_id,
                })
                .await?;
        }

        info!("Seeded base folder structure");
        Ok(())
    }
}
