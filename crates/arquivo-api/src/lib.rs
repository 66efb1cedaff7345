//! # arquivo-api
//!
//! HTTP layer for Arquivo: Axum routes, handlers, DTOs, and application
//! state wiring.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod router;
pub mod state;
