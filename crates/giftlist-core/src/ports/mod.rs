//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No filesystem implementation details
//! - The store trait is limited to what the registry needs: seed, list, mark bought

pub mod gift_store;

use thiserror::Error;

pub use gift_store::GiftStore;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage medium could not be reached (connection, file access).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The backing structure (table, file) could not be created.
    #[error("Schema initialization failed: {0}")]
    Schema(String),

    /// Stored data could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other backend failure while executing an operation.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A gift identifier was not a positive integer.
    #[error("Invalid gift identifier: {0:?}")]
    InvalidIdentifier(String),
}
