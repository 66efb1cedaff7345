//! Key allocator: computes fresh, parent-prefixed folder keys.
//!
//! A folder key encodes tree position by prefix containment: children of
//! `"2"` are `"21"`, `"22"`, ... and children of `"21"` are `"211"`,
//! `"212"`, ... Top-level folders (children of the root sentinel `"0"`)
//! are plain integers starting at `"1"`.
//!
//! One allocation policy applies everywhere: take the largest numeric suffix
//! among the parent's actual children (found by `parent_key`, not by string
//! prefix — `"111"` is both child 11 of `"1"` and child 1 of `"11"`) and
//! add one. Because keys are globally unique and the prefix scheme is
//! ambiguous across parents, the candidate is then probed forward until it
//! is absent from the whole collection. Gaps left by hypothetical deletions
//! are never back-filled.

use std::collections::HashSet;

use thiserror::Error;

use arquivo_core::error::AppError;
use arquivo_entity::folder::{Folder, ROOT_KEY};

/// Key allocation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The requested parent key does not exist in the collection. Allocating
    /// under an unknown parent is a caller contract violation; no key is
    /// synthesized.
    #[error("unknown parent folder '{0}'")]
    UnknownParent(String),
}

impl From<KeyError> for AppError {
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::UnknownParent(key) => {
                AppError::not_found(format!("Parent folder '{key}' not found"))
            }
        }
    }
}

/// Compute a fresh key for a new child of `parent_key`.
///
/// The returned key is guaranteed absent from `folders` and, for non-root
/// parents, carries `parent_key` as a strict prefix. Pure function; the
/// caller persists the record, and the storage layer's uniqueness constraint
/// is what closes the read-then-write race between two concurrent creates.
pub fn allocate_key(folders: &[Folder], parent_key: &str) -> Result<String, KeyError> {
    if parent_key != ROOT_KEY && !folders.iter().any(|f| f.key == parent_key) {
        return Err(KeyError::UnknownParent(parent_key.to_string()));
    }

    let existing: HashSet<&str> = folders.iter().map(|f| f.key.as_str()).collect();

    let max_suffix = folders
        .iter()
        .filter(|f| f.parent_key.as_deref() == Some(parent_key))
        .filter_map(|f| numeric_suffix(&f.key, parent_key))
        .max();

    let mut suffix = max_suffix.map_or(1, |m| m + 1);
    loop {
        let candidate = if parent_key == ROOT_KEY {
            suffix.to_string()
        } else {
            format!("{parent_key}{suffix}")
        };
        if !existing.contains(candidate.as_str()) {
            return Ok(candidate);
        }
        suffix += 1;
    }
}

/// The numeric suffix of `key` after stripping the parent prefix. Top-level
/// keys are whole integers (the sentinel `"0"` is not a prefix of them).
fn numeric_suffix(key: &str, parent_key: &str) -> Option<u64> {
    if parent_key == ROOT_KEY {
        key.parse().ok()
    } else {
        key.strip_prefix(parent_key)?.parse().ok()
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

    fn with_root(children: &[(&str, &str)]) -> Vec<Folder> {
        let mut folders = vec![folder("0", None)];
        folders.extend(children.iter().map(|&(k, p)| folder(k, Some(p))));
        folders
    }

    #[test]
    fn test_first_top_level_key_is_one() {
        let folders = vec![folder("0", None)];
        assert_eq!(allocate_key(&folders, "0").unwrap(), "1");
    }

    #[test]
    fn test_top_level_allocation_tolerates_gaps() {
        let folders = with_root(&[("1", "0"), ("2", "0"), ("4", "0")]);
        assert_eq!(allocate_key(&folders, "0").unwrap(), "5");
    }

    #[test]
    fn test_first_child_key_appends_one() {
        let folders = with_root(&[("2", "0")]);
        assert_eq!(allocate_key(&folders, "2").unwrap(), "21");
    }

    #[test]
    fn test_child_allocation_increments_max_sibling() {
        let folders = with_root(&[("2", "0"), ("21", "2"), ("22", "2")]);
        assert_eq!(allocate_key(&folders, "2").unwrap(), "23");
    }

    #[test]
    fn test_sibling_gaps_are_not_back_filled() {
        let folders = with_root(&[("2", "0"), ("21", "2"), ("24", "2")]);
        assert_eq!(allocate_key(&folders, "2").unwrap(), "25");
    }

    #[test]
    fn test_unknown_parent_is_rejected() {
        let folders = with_root(&[("1", "0")]);
        assert_eq!(
            allocate_key(&folders, "9").unwrap_err(),
            KeyError::UnknownParent("9".to_string())
        );
    }

    #[test]
    fn test_candidate_probes_past_foreign_prefix_collision() {
        // Children 1..=9 of "1" exist, so the next suffix is 10, giving
        // "110" — but that key is not derivable from "11"'s children, only
        // from "1"'s. If it were somehow taken, probing moves on.
        let mut children: Vec<(String, String)> = (1..=9)
            .map(|i| (format!("1{i}"), "1".to_string()))
            .collect();
        children.push(("110".to_string(), "11".to_string())); // adversarial occupant
        let mut folders = vec![folder("0", None), folder("1", Some("0"))];
        folders.extend(
            children
                .iter()
                .map(|(k, p)| folder(k, Some(p.as_str()))),
        );

        let key = allocate_key(&folders, "1").unwrap();
        assert_eq!(key, "111");
        assert!(folders.iter().all(|f| f.key != key));
    }

    #[test]
    fn test_never_returns_existing_key() {
        let folders = with_root(&[
            ("1", "0"),
            ("2", "0"),
            ("11", "1"),
            ("12", "1"),
            ("111", "11"),
        ]);
        for parent in ["0", "1", "2", "11", "111"] {
            let key = allocate_key(&folders, parent).unwrap();
            assert!(folders.iter().all(|f| f.key != key), "collision for {parent}");
            if parent != "0" {
                assert!(key.starts_with(parent));
            }
        }
    }
}
