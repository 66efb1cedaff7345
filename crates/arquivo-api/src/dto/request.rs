//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Create folder request body.
///
/// The browser sends the currently selected folder as the parent; only its
/// key matters here. The path is derived server-side from the parent record,
/// never trusted from the client.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder display name.
    #[validate(length(min = 1, max = 255, message = "Folder name is required"))]
    pub name: String,
    /// The folder owner.
    pub user_id: Uuid,
    /// Key of the parent folder (`"0"` for a top-level folder).
    #[validate(length(min = 1, message = "Parent key is required"))]
    pub parent_key: String,
}

/// Query parameters for the folder tree endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderTreeQuery {
    /// Owner whose folders are materialized.
    pub user_id: Option<Uuid>,
}

/// Query parameters for the file listing endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListQuery {
    /// Key of the folder whose files are listed.
    pub folder_key: Option<String>,
}

/// Query parameters for the user lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserLookupQuery {
    /// Email to resolve.
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_folder_request_accepts_camel_case() {
        let req: CreateFolderRequest = serde_json::from_str(
            r#"{"name":"Trabalho","userId":"00000000-0000-0000-0000-000000000000","parentKey":"1"}"#,
        )
        .unwrap();
        assert_eq!(req.parent_key, "1");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let req = CreateFolderRequest {
            name: String::new(),
            user_id: Uuid::nil(),
            parent_key: "0".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
