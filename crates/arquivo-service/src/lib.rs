//! # arquivo-service
//!
//! Business logic services for Arquivo. The hierarchy builder and the key
//! allocator in the folder module are pure functions; the services around
//! them orchestrate repositories and the object store.

pub mod file;
pub mod folder;
pub mod seed;
pub mod user;
