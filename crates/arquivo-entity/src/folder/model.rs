//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Reserved key of the root folder, parent of all top-level folders.
pub const ROOT_KEY: &str = "0";

/// A folder in the file hierarchy.
///
/// The `key` both identifies the folder (globally unique) and encodes its
/// tree position: a child key is always the parent key followed by the
/// child's decimal suffix. The root carries the sentinel key `"0"` and a
/// null `parent_key`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// Position-encoding key, unique across the whole collection.
    pub key: String,
    /// Folder display name.
    pub name: String,
    /// Full materialized path (e.g., `/Documentos/Trabalho`). Derived from
    /// the parent path at creation time and not recomputed afterwards.
    pub path: String,
    /// Key of the owning folder, or `None` for the root record.
    pub parent_key: Option<String>,
    /// The folder owner.
    pub user_id: Uuid,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is the root folder.
    pub fn is_root(&self) -> bool {
        self.key == ROOT_KEY
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolder {
    /// Position-encoding key (allocated, never caller-supplied).
    pub key: String,
    /// Folder display name.
    pub name: String,
    /// Full materialized path.
    pub path: String,
    /// Key of the owning folder.
    pub parent_key: Option<String>,
    /// The folder owner.
    pub user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(key: &str, parent: Option<&str>) -> Folder {
        Folder {
            id: Uuid::new_v4(),
            key: key.to_string(),
            name: "x".to_string(),
            path: "/x".to_string(),
            parent_key: parent.map(str::to_string),
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_root_detection() {
        assert!(folder("0", None).is_root());
        assert!(!folder("1", Some("0")).is_root());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(folder("11", Some("1"))).unwrap();
        assert!(json.get("parentKey").is_some());
        assert!(json.get("userId").is_some());
        assert!(json.get("parent_key").is_none());
    }
}
