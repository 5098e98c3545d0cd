//! Composition utilities for building gift stores.
//!
//! This module turns a resolved `StoreBackend` into a concrete store. It is
//! focused purely on construction and should not contain any domain logic.

use anyhow::Result;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

use giftlist_core::{GiftStore, StoreBackend};

use crate::repositories::{JsonGiftStore, SqliteGiftStore};
use crate::setup::setup_database;

/// Factory for creating gift store instances.
///
/// This struct provides composition utilities only, no domain logic.
pub struct StoreFactory;

impl StoreFactory {
    /// Build the store selected by `backend`.
    ///
    /// For `SQLite` this opens the pool and applies the schema, so an
    /// unreachable database fails here.
    pub async fn build(backend: &StoreBackend) -> Result<Arc<dyn GiftStore>> {
        let store: Arc<dyn GiftStore> = match backend {
            StoreBackend::Sqlite { url } => {
                let pool = setup_database(url).await?;
                Self::sqlite_store(pool)
            }
            StoreBackend::Json { path } => Self::json_store(path.clone()),
        };
        tracing::info!(backend = %backend.kind(), "Gift store ready");
        Ok(store)
    }

    /// Create a `SQLite` gift store from a pool.
    pub fn sqlite_store(pool: SqlitePool) -> Arc<SqliteGiftStore> {
        Arc::new(SqliteGiftStore::new(pool))
    }

    /// Create a JSON-file gift store.
    pub fn json_store(path: impl Into<PathBuf>) -> Arc<JsonGiftStore> {
        Arc::new(JsonGiftStore::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftlist_core::SeedCatalog;

    #[tokio::test]
    async fn test_build_sqlite_backend() {
        let dir = tempfile::tempdir().unwrap();
        let backend = StoreBackend::Sqlite {
            url: format!("sqlite://{}", dir.path().join("gifts.db").display()),
        };

        let store = StoreFactory::build(&backend).await.unwrap();
        assert_eq!(
            store.initialize(&SeedCatalog::default()).await.unwrap(),
            22
        );
    }

    #[tokio::test]
    async fn test_build_json_backend() {
        let dir = tempfile::tempdir().unwrap();
        let backend = StoreBackend::Json {
            path: dir.path().join("gifts.json"),
        };

        let store = StoreFactory::build(&backend).await.unwrap();
        assert_eq!(
            store.initialize(&SeedCatalog::default()).await.unwrap(),
            22
        );
    }

    #[tokio::test]
    async fn test_build_fails_for_unreachable_database() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let backend = StoreBackend::Sqlite {
            url: format!("sqlite://{}", blocker.join("gifts.db").display()),
        };

        assert!(StoreFactory::build(&backend).await.is_err());
    }
}
