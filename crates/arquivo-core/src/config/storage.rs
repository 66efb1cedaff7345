//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Object storage configuration.
///
/// One bucket per deployment; objects are laid out under it following the
/// folder paths recorded in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for locally stored objects.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Bucket name. Becomes a directory under `data_root` for the local
    /// provider.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Maximum accepted upload size in bytes.
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_bytes: u64,
}

fn default_data_root() -> String {
    "data/storage".to_string()
}

fn default_bucket() -> String {
    "files-manager".to_string()
}

fn default_max_upload_size() -> u64 {
    // 100 MiB
    100 * 1024 * 1024
}
