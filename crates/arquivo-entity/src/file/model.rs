//! File metadata entity model.
//!
//! Only metadata lives here; the blob itself is kept in the object store
//! under a path derived from the owning folder's path plus the file name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Metadata for one stored file.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Unique file identifier.
    pub id: Uuid,
    /// File key in the form `{folderKey}_{uuid}`.
    pub key: String,
    /// Original file name.
    pub name: String,
    /// MIME type as reported by the upload.
    pub mime_type: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Full path including the owning folder's path.
    pub path: String,
    /// Last modification time.
    pub last_modified: DateTime<Utc>,
    /// Key of the owning folder.
    pub folder_key: String,
    /// When the metadata record was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to persist a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFile {
    /// File key in the form `{folderKey}_{uuid}`.
    pub key: String,
    /// Original file name.
    pub name: String,
    /// MIME type.
    pub mime_type: String,
    /// Size in bytes.
    pub size_bytes: i64,
    /// Full path including the owning folder's path.
    pub path: String,
    /// Key of the owning folder.
    pub folder_key: String,
}
