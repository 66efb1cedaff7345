//! Folder domain entities.

pub mod model;
pub mod tree;

pub use model::{CreateFolder, Folder, ROOT_KEY};
pub use tree::FolderNode;
