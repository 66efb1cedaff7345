//! # arquivo-database
//!
//! PostgreSQL access layer: connection pool management, the migration
//! runner, and one repository per persisted entity.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
