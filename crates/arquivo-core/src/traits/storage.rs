//! Object store trait for pluggable blob storage backends.
//!
//! The rest of the application never touches blob bytes directly; uploads
//! hand a byte buffer to an [`ObjectStore`] keyed by an object path derived
//! from the owning folder's materialized path plus the file name.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for blob storage backends.
///
/// The [`ObjectStore`] trait is defined here in `arquivo-core` and
/// implemented in `arquivo-storage`.
#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write a blob at the given object path, creating missing prefixes.
    async fn put(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Read a blob into memory as a complete byte vector.
    async fn get(&self, path: &str) -> AppResult<Bytes>;

    /// Delete the blob at the given object path.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether a blob exists at the given object path.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
