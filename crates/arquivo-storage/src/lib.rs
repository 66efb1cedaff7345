//! # arquivo-storage
//!
//! Blob storage backends implementing the [`arquivo_core::traits::ObjectStore`]
//! boundary. The application core never handles blob bytes beyond passing
//! buffers through this trait.

pub mod local;

pub use local::LocalObjectStore;
