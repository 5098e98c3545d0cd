//! Gift store trait definition.
//!
//! This port defines the interface for gift persistence.
//! Implementations handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Gift, GiftId, SeedCatalog};

/// Durable storage of the gift set.
///
/// Every backend must behave identically through this trait; the shared
/// property suite in `giftlist-db` runs against each implementation.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Each call acquires and releases its own storage resource
/// - `mark_bought` is a single conditional update, never read-then-write
///   performed by the caller
#[async_trait]
pub trait GiftStore: Send + Sync {
    /// Ensure the backing storage exists and seed it if it is empty.
    ///
    /// Safe to call on every start. Returns the number of records inserted,
    /// which is zero when the store already held any record.
    async fn initialize(&self, catalog: &SeedCatalog) -> Result<usize, RepositoryError>;

    /// All gifts ordered by ascending id.
    async fn list_all(&self) -> Result<Vec<Gift>, RepositoryError>;

    /// Flip `bought` to true if the gift exists and is not bought yet.
    ///
    /// Returns `Ok(true)` only when this call performed the transition.
    /// Unknown ids and already bought gifts yield `Ok(false)`.
    async fn mark_bought(&self, id: GiftId) -> Result<bool, RepositoryError>;
}
