//! Library crate for greeting-service, exposing modules for binaries and tests.

/// Listener configuration loading.
pub mod config;
pub mod dto;
/// HTTP-facing error type.
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
/// Pure helpers.
pub mod utils;
