//! Hierarchy builder: materializes the flat folder collection into a tree.
//!
//! The flat collection is the single source of truth; the nested tree is a
//! derived view, recomputed on every read. Construction is a recursive
//! filter over the input (O(n²), fine for the hundreds of folders a personal
//! file manager holds), with children kept in input order — callers fetch
//! the flat set ordered by key ascending, which yields the stable,
//! human-expected ordering.

use std::collections::HashSet;

use thiserror::Error;

use arquivo_core::error::AppError;
use arquivo_entity::folder::{Folder, FolderNode, ROOT_KEY};

/// Malformed flat input: the parent relation cannot be materialized into a
/// tree. These are caller precondition violations, reported instead of
/// recursing unboundedly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// A folder references a parent key absent from the collection.
    #[error("folder '{child}' references missing parent '{parent}'")]
    DanglingParent {
        /// Key of the offending folder.
        child: String,
        /// The missing parent key.
        parent: String,
    },
    /// The parent chain of a folder never terminates at a root.
    #[error("parent chain does not terminate at a root (cycle through '{0}')")]
    CycleDetected(String),
}

impl From<HierarchyError> for AppError {
    fn from(err: HierarchyError) -> Self {
        AppError::internal(format!("Malformed folder hierarchy: {err}"))
    }
}

/// Build the nested folder tree from a flat collection.
///
/// Selects the records whose `parent_key` equals `root_parent_key` and
/// recursively attaches their children. Pure function of its input: same
/// input, same output.
///
/// With `root_parent_key = None` (a full-forest build) roots are the
/// records with no parent, plus — when the collection contains no `"0"`
/// record — the records parented directly on the root sentinel. A
/// user-scoped slice of the collection often excludes the shared root
/// record, and the sentinel is always a valid parent, never a dangling one.
/// Every input record must end up attached; recursion depth is additionally
/// bounded by the record count, so cyclic or dangling inputs fail with a
/// [`HierarchyError`] rather than hanging.
pub fn build_hierarchy(
    folders: &[Folder],
    root_parent_key: Option<&str>,
) -> Result<Vec<FolderNode>, HierarchyError> {
    let keys: HashSet<&str> = folders.iter().map(|f| f.key.as_str()).collect();
    for folder in folders {
        if let Some(parent) = folder.parent_key.as_deref() {
            if parent != ROOT_KEY && !keys.contains(parent) && root_parent_key != Some(parent) {
                return Err(HierarchyError::DanglingParent {
                    child: folder.key.clone(),
                    parent: parent.to_string(),
                });
            }
        }
    }

    let sentinel_is_root = root_parent_key.is_none() && !keys.contains(ROOT_KEY);
    let depth_budget = folders.len();
    let nodes: Vec<FolderNode> = folders
        .iter()
        .filter(|f| match (root_parent_key, f.parent_key.as_deref()) {
            (Some(marker), Some(parent)) => parent == marker,
            (Some(_), None) => false,
            (None, None) => true,
            (None, Some(parent)) => sentinel_is_root && parent == ROOT_KEY,
        })
        .map(|root| {
            let subfolders = build_level(folders, &root.key, depth_budget.saturating_sub(1))?;
            Ok(FolderNode::new(root.clone(), subfolders))
        })
        .collect::<Result<_, _>>()?;

    // A full-forest build must attach every record. With no dangling
    // parents, an unattached record means its ancestor chain loops.
    if root_parent_key.is_none() {
        let attached: usize = nodes.iter().map(FolderNode::count).sum();
        if attached != folders.len() {
            let mut seen = HashSet::new();
            collect_keys(&nodes, &mut seen);
            let stray = folders
                .iter()
                .find(|f| !seen.contains(f.key.as_str()))
                .map(|f| f.key.clone())
                .unwrap_or_default();
            return Err(HierarchyError::CycleDetected(stray));
        }
    }

    Ok(nodes)
}

fn build_level(
    folders: &[Folder],
    parent: &str,
    depth_budget: usize,
) -> Result<Vec<FolderNode>, HierarchyError> {
    let children: Vec<&Folder> = folders
        .iter()
        .filter(|f| f.parent_key.as_deref() == Some(parent))
        .collect();

    if children.is_empty() {
        return Ok(Vec::new());
    }
    if depth_budget == 0 {
        return Err(HierarchyError::CycleDetected(parent.to_string()));
    }

    children
        .into_iter()
        .map(|child| {
            let subfolders = build_level(folders, &child.key, depth_budget - 1)?;
            Ok(FolderNode::new(child.clone(), subfolders))
        })
        .collect()
}

fn collect_keys<'a>(nodes: &'a [FolderNode], seen: &mut HashSet<&'a str>) {
    for node in nodes {
        seen.insert(node.key.as_str());
        collect_keys(&node.subfolders, seen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn folder(key: &str, parent: Option<&str>) -> Folder {
        Folder {
            id: Uuid::new_v4(),
            key: key.to_string(),
            name: format!("folder-{key}"),
            path: format!("/{key}"),
            parent_key: parent.map(str::to_string),
            user_id: Uuid::nil(),
            created_at: Utc::now(),
        }
    }

    fn seeded_set() -> Vec<Folder> {
        vec![
            folder("0", None),
            folder("1", Some("0")),
            folder("11", Some("1")),
            folder("2", Some("0")),
        ]
    }

    #[test]
    fn test_builds_nested_tree_from_flat_set() {
        let tree = build_hierarchy(&seeded_set(), None).unwrap();

        assert_eq!(tree.len(), 1);
        let root = &tree[0];
        assert_eq!(root.key, "0");
        assert_eq!(root.subfolders.len(), 2);
        assert_eq!(root.subfolders[0].key, "1");
        assert_eq!(root.subfolders[0].subfolders.len(), 1);
        assert_eq!(root.subfolders[0].subfolders[0].key, "11");
        assert_eq!(root.subfolders[1].key, "2");
        assert!(root.subfolders[1].subfolders.is_empty());
    }

    #[test]
    fn test_subtree_build_from_explicit_root_marker() {
        let tree = build_hierarchy(&seeded_set(), Some("0")).unwrap();
        let keys: Vec<&str> = tree.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "2"]);
    }

    #[test]
    fn test_node_count_equals_input_count() {
        let flat = seeded_set();
        let tree = build_hierarchy(&flat, None).unwrap();
        let total: usize = tree.iter().map(FolderNode::count).sum();
        assert_eq!(total, flat.len());
    }

    #[test]
    fn test_every_child_has_matching_parent_key() {
        let tree = build_hierarchy(&seeded_set(), None).unwrap();

        fn check(node: &FolderNode) {
            for child in &node.subfolders {
                assert_eq!(child.parent_key.as_deref(), Some(node.key.as_str()));
                check(child);
            }
        }
        tree.iter().for_each(check);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let flat = seeded_set();
        let first = build_hierarchy(&flat, None).unwrap();
        let second = build_hierarchy(&flat, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_children_preserve_input_order() {
        // Input deliberately ordered "2" before "1".
        let flat = vec![folder("0", None), folder("2", Some("0")), folder("1", Some("0"))];
        let tree = build_hierarchy(&flat, None).unwrap();
        let keys: Vec<&str> = tree[0].subfolders.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, vec!["2", "1"]);
    }

    #[test]
    fn test_empty_input_yields_empty_forest() {
        assert_eq!(build_hierarchy(&[], None).unwrap(), Vec::new());
    }

    #[test]
    fn test_sentinel_parented_records_root_the_forest_without_root_record() {
        // A user-scoped slice excludes the shared root record; folders
        // hanging off the sentinel must still materialize.
        let flat = vec![folder("5", Some("0")), folder("51", Some("5"))];
        let tree = build_hierarchy(&flat, None).unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].key, "5");
        assert_eq!(tree[0].subfolders.len(), 1);
        assert_eq!(tree[0].subfolders[0].key, "51");
    }

    #[test]
    fn test_sentinel_parented_records_attach_under_present_root_record() {
        let tree = build_hierarchy(&seeded_set(), None).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].key, "0");
    }

    #[test]
    fn test_dangling_parent_is_rejected() {
        let flat = vec![folder("0", None), folder("11", Some("1"))];
        let err = build_hierarchy(&flat, None).unwrap_err();
        assert_eq!(
            err,
            HierarchyError::DanglingParent {
                child: "11".to_string(),
                parent: "1".to_string(),
            }
        );
    }

    #[test]
    fn test_cycle_is_rejected_not_recursed() {
        // "1" and "11" point at each other; both keys exist so the dangling
        // check passes, but neither chain reaches a root.
        let flat = vec![folder("0", None), folder("1", Some("11")), folder("11", Some("1"))];
        let err = build_hierarchy(&flat, None).unwrap_err();
        assert!(matches!(err, HierarchyError::CycleDetected(_)));
    }

    #[test]
    fn test_self_parent_is_rejected() {
        let flat = vec![folder("0", None), folder("1", Some("1"))];
        let err = build_hierarchy(&flat, None).unwrap_err();
        assert!(matches!(err, HierarchyError::CycleDetected(_)));
    }
}
