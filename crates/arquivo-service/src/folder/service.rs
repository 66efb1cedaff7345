//! Folder read and create operations.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use arquivo_core::error::AppError;
use arquivo_database::repositories::folder::FolderStore;
use arquivo_entity::folder::{CreateFolder, Folder, FolderNode};

use super::hierarchy::build_hierarchy;
use super::keys::allocate_key;

/// How many times a create retries after losing the key race to a
/// concurrent create under the same parent.
const CREATE_MAX_ATTEMPTS: u32 = 3;

/// Manages folder reads and creation.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder storage boundary.
    folder_repo: Arc<dyn FolderStore>,
}

/// Request to create a new folder.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder display name.
    pub name: String,
    /// The folder owner.
    pub user_id: Uuid,
    /// Key of the parent folder (`"0"` for a top-level folder).
    pub parent_key: String,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<dyn FolderStore>) -> Self {
        Self { folder_repo }
    }

    /// Build the complete nested folder tree for a user.
    pub async fn get_tree(&self, user_id: Uuid) -> Result<Vec<FolderNode>, AppError> {
        let folders = self.folder_repo.find_all_for_user(user_id).await?;
        let tree = build_hierarchy(&folders, None)?;
        Ok(tree)
    }

    /// Look up a folder by key, failing when it does not exist.
    pub async fn get_folder(&self, key: &str) -> Result<Folder, AppError> {
        self.folder_repo
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// Create a new folder under the requested parent.
    ///
    /// Allocation reads the flat collection, computes a candidate key, and
    /// persists — a read-then-write gap two concurrent creates can race
    /// through. The `folders.key` uniqueness constraint makes the loser fail
    /// with a conflict, after which the flat set is re-read and allocation
    /// retried.
    pub async fn create_folder(&self, req: CreateFolderRequest) -> Result<Folder, AppError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }
        if name.contains('/') {
            return Err(AppError::validation("Folder name cannot contain '/'"));
        }

        let parent = self
            .folder_repo
            .find_by_key(&req.parent_key)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Parent folder '{}' not found", req.parent_key))
            })?;

        let path = if parent.path == "/" {
            format!("/{name}")
        } else {
            format!("{}/{}", parent.path, name)
        };

        let mut attempt = 1;
        loop {
            // Allocation scans the whole collection: keys are globally
            // unique, not merely unique among one user's folders.
            let folders = self.folder_repo.find_all().await?;
            let key = allocate_key(&folders, &req.parent_key)?;

            let record = CreateFolder {
                key: key.clone(),
                name: name.to_string(),
                path: path.clone(),
                parent_key: Some(req.parent_key.clone()),
                user_id: req.user_id,
            };

            match self.folder_repo.create(&record).await {
                Ok(folder) => {
                    info!(
                        user_id = %req.user_id,
                        key = %folder.key,
                        path = %folder.path,
                        "Folder created"
                    );
                    return Ok(folder);
                }
                Err(e) if e.is_conflict() && attempt < CREATE_MAX_ATTEMPTS => {
                    warn!(
                        key = %key,
                        attempt,
                        "Folder key taken by a concurrent create, retrying allocation"
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use arquivo_core::result::AppResult;
    use arquivo_entity::folder::ROOT_KEY;

    fn record(data: &CreateFolder) -> Folder {
        Folder {
            id: Uuid::new_v4(),
            key: data.key.clone(),
            name: data.name.clone(),
            path: data.path.clone(),
            parent_key: data.parent_key.clone(),
            user_id: data.user_id,
            created_at: Utc::now(),
        }
    }

    /// In-memory store where, for the first `losses` creates, a competing
    /// writer grabs the allocated key just before our insert lands.
    #[derive(Debug)]
    struct ContendedStore {
        folders: Mutex<Vec<Folder>>,
        losses: AtomicU32,
        create_calls: AtomicU32,
    }

    impl ContendedStore {
        fn seeded(losses: u32) -> Self {
            let root = CreateFolder {
                key: ROOT_KEY.to_string(),
                name: "ROOT".to_string(),
                path: "/".to_string(),
                parent_key: None,
                user_id: Uuid::nil(),
            };
            Self {
                folders: Mutex::new(vec![record(&root)]),
                losses: AtomicU32::new(losses),
                create_calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl FolderStore for ContendedStore {
        async fn find_all(&self) -> AppResult<Vec<Folder>> {
            Ok(self.folders.lock().unwrap().clone())
        }

        async fn find_all_for_user(&self, user_id: Uuid) -> AppResult<Vec<Folder>> {
            Ok(self
                .folders
                .lock()
                .unwrap()
                .iter()
                .filter(|f| f.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn find_by_key(&self, key: &str) -> AppResult<Option<Folder>> {
            Ok(self
                .folders
                .lock()
                .unwrap()
                .iter()
                .find(|f| f.key == key)
                .cloned())
        }

        async fn count(&self) -> AppResult<i64> {
            Ok(self.folders.lock().unwrap().len() as i64)
        }

        async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            let mut folders = self.folders.lock().unwrap();

            let lost = self
                .losses
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if lost {
                let mut competitor = data.clone();
                competitor.name = format!("competitor-{}", data.key);
                competitor.user_id = Uuid::new_v4();
                folders.push(record(&competitor));
                return Err(AppError::conflict(format!(
                    "Folder key '{}' already exists",
                    data.key
                )));
            }

            if folders.iter().any(|f| f.key == data.key) {
                return Err(AppError::conflict(format!(
                    "Folder key '{}' already exists",
                    data.key
                )));
            }
            let folder = record(data);
            folders.push(folder.clone());
            Ok(folder)
        }
    }

    #[tokio::test]
    async fn test_create_retries_to_a_fresh_key_after_losing_the_race() {
        let store = Arc::new(ContendedStore::seeded(1));
        let service = FolderService::new(store.clone());

        let folder = service
            .create_folder(CreateFolderRequest {
                name: "Trabalho".to_string(),
                user_id: Uuid::nil(),
                parent_key: ROOT_KEY.to_string(),
            })
            .await
            .unwrap();

        // The first attempt allocated "1" and lost it to the competing
        // create; the retry re-read the collection and moved on to "2".
        assert_eq!(folder.key, "2");
        assert_eq!(store.create_calls.load(Ordering::SeqCst), 2);
        let stored = store.find_by_key("2").await.unwrap().unwrap();
        assert_eq!(stored.name, "Trabalho");
    }

    #[tokio::test]
    async fn test_create_surfaces_conflict_after_exhausting_retries() {
        let store = Arc::new(ContendedStore::seeded(u32::MAX));
        let service = FolderService::new(store.clone());

        let err = service
            .create_folder(CreateFolderRequest {
                name: "Trabalho".to_string(),
                user_id: Uuid::nil(),
                parent_key: ROOT_KEY.to_string(),
            })
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(
            store.create_calls.load(Ordering::SeqCst),
            CREATE_MAX_ATTEMPTS
        );
    }
}
