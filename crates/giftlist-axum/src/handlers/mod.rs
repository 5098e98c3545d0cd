//! HTTP request handlers.
//!
//! Handlers are thin: they extract input, call the registry service and
//! shape the response.

pub mod gifts;
pub mod pages;

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}
