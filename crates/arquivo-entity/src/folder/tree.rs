//! Folder tree structure for hierarchical display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::Folder;

/// A node in the folder tree: one folder record plus its children.
///
/// The nested tree is a derived, recomputed-on-read view; the flat folder
/// collection stays the single source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    /// Folder ID.
    pub id: Uuid,
    /// Position-encoding key.
    pub key: String,
    /// Folder name.
    pub name: String,
    /// Full materialized path.
    pub path: String,
    /// Key of the owning folder.
    pub parent_key: Option<String>,
    /// The folder owner.
    pub user_id: Uuid,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// Child folder nodes, in flat-input order.
    pub subfolders: Vec<FolderNode>,
}

impl FolderNode {
    /// Wrap a folder record with the given children.
    pub fn new(folder: Folder, subfolders: Vec<FolderNode>) -> Self {
        Self {
            id: folder.id,
            key: folder.key,
            name: folder.name,
            path: folder.path,
            parent_key: folder.parent_key,
            user_id: folder.user_id,
            created_at: folder.created_at,
            subfolders,
        }
    }

    /// Total number of folders in this subtree, including the node itself.
    pub fn count(&self) -> usize {
        1 + self.subfolders.iter().map(FolderNode::count).sum::<usize>()
    }
}
