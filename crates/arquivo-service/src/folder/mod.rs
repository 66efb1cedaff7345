//! Folder hierarchy, key allocation, and folder CRUD.

pub mod hierarchy;
pub mod keys;
pub mod service;

pub use hierarchy::{HierarchyError, build_hierarchy};
pub use keys::{KeyError, allocate_key};
pub use service::FolderService;
