//! Repositories — one per persisted entity.

pub mod file;
pub mod folder;
pub mod user;

pub use file::FileRepository;
pub use folder::{FolderRepository, FolderStore};
pub use user::UserRepository;
