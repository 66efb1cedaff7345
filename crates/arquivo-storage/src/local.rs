//! Local filesystem object store.
//!
//! The configured bucket becomes a directory under the data root; object
//! paths map directly to file paths beneath it.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use arquivo_core::config::storage::StorageConfig;
use arquivo_core::error::{AppError, ErrorKind};
use arquivo_core::result::AppResult;
use arquivo_core::traits::storage::ObjectStore;

/// Object store backed by the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    /// Bucket directory all objects live under.
    root: PathBuf,
}

impl LocalObjectStore {
    /// Create a local store for the configured bucket, creating the bucket
    /// directory if it does not exist yet.
    pub async fn new(config: &StorageConfig) -> AppResult<Self> {
        let root = PathBuf::from(&config.data_root).join(&config.bucket);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create bucket directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve an object path to an absolute path within the bucket.
    fn resolve(&self, path: &str) -> PathBuf {
        let clean = path.trim_start_matches('/');
        self.root.join(clean)
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn put(&self, path: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(path);
        self.ensure_parent(&full_path).await?;

        let mut file = fs::File::create(&full_path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create object: {path}"),
                e,
            )
        })?;
        file.write_all(&data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write object: {path}"),
                e,
            )
        })?;
        file.flush().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to flush object: {path}"),
                e,
            )
        })?;

        debug!(path, bytes = data.len(), "Object stored");
        Ok(())
    }

    async fn get(&self, path: &str) -> AppResult<Bytes> {
        let full_path = self.resolve(path);
        let data = fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Object not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read object: {path}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path);
        fs::remove_file(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Object not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete object: {path}"),
                    e,
                )
            }
        })?;
        Ok(())
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        Ok(self.resolve(path).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store(tag: &str) -> LocalObjectStore {
        let config = StorageConfig {
            data_root: std::env::temp_dir()
                .join(format!("arquivo-storage-test-{tag}-{}", std::process::id()))
                .display()
                .to_string(),
            bucket: "files-manager".to_string(),
            max_upload_size_bytes: 1024,
        };
        LocalObjectStore::new(&config).await.unwrap()
    }

    #[tokio::test]
    async fn test_put_get_roundtrip_with_nested_path() {
        let store = temp_store("roundtrip").await;
        store
            .put("/Documentos/Trabalho/nota.txt", Bytes::from_static(b"ola"))
            .await
            .unwrap();

        assert!(store.exists("/Documentos/Trabalho/nota.txt").await.unwrap());
        let data = store.get("Documentos/Trabalho/nota.txt").await.unwrap();
        assert_eq!(&data[..], b"ola");
    }

    #[tokio::test]
    async fn test_get_missing_object_is_not_found() {
        let store = temp_store("missing").await;
        let err = store.get("/nope.bin").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_removes_object() {
        let store = temp_store("delete").await;
        store.put("/f.bin", Bytes::from_static(b"x")).await.unwrap();
        store.delete("/f.bin").await.unwrap();
        assert!(!store.exists("/f.bin").await.unwrap());
    }
}
