//! # arquivo-entity
//!
//! Persisted domain models for Arquivo. All entities serialize with
//! camelCase field names, matching the JSON surface the browser UI consumes.

pub mod file;
pub mod folder;
pub mod user;
