//! Boundary traits implemented by infrastructure crates.

pub mod storage;

pub use storage::ObjectStore;
