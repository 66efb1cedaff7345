//! # arquivo-core
//!
//! Core crate for Arquivo. Contains the configuration schemas, the unified
//! error system, and the object-storage boundary trait.
//!
//! This crate has **no** internal dependencies on other Arquivo crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
