//! Registry service - the facade the web and CLI adapters talk to.
//!
//! Storage failures on the read and purchase paths are logged and absorbed
//! into empty/false results. Only `initialize` propagates them, because the
//! application cannot run without its store.

use std::sync::Arc;

use crate::domain::{Gift, GiftId, SeedCatalog};
use crate::ports::{CoreError, GiftStore};

/// Service for gift registry operations.
pub struct RegistryService {
    store: Arc<dyn GiftStore>,
    catalog: SeedCatalog,
}

impl RegistryService {
    /// Create a new registry service over an explicitly constructed store.
    pub fn new(store: Arc<dyn GiftStore>, catalog: SeedCatalog) -> Self {
        Self { store, catalog }
    }

    /// Create the backing storage and seed it if empty.
    ///
    /// Returns the number of gifts seeded by this call.
    pub async fn initialize(&self) -> Result<usize, CoreError> {
        let seeded = self.store.initialize(&self.catalog).await?;
        if seeded > 0 {
            tracing::info!(seeded, "Seeded gift store from catalog");
        } else {
            tracing::info!("Gift store already populated, seeding skipped");
        }
        Ok(seeded)
    }

    /// All gifts in id order, or an empty list if the store could not be read.
    ///
    /// An empty result is either a truly empty store or a read failure; the
    /// failure is only visible in the log. Use [`Self::try_list_gifts`] to
    /// tell the two apart.
    pub async fn list_gifts(&self) -> Vec<Gift> {
        match self.store.list_all().await {
            Ok(gifts) => gifts,
            Err(e) => {
                tracing::error!(error = %e, "Failed to list gifts");
                Vec::new()
            }
        }
    }

    /// All gifts in id order, surfacing storage failures.
    pub async fn try_list_gifts(&self) -> Result<Vec<Gift>, CoreError> {
        self.store.list_all().await.map_err(CoreError::from)
    }

    /// Mark the gift identified by `raw_id` as bought.
    ///
    /// Returns true only when this call flipped the flag. Malformed ids,
    /// unknown ids, already bought gifts and storage failures all yield false.
    pub async fn mark_bought(&self, raw_id: &str) -> bool {
        let id = match GiftId::parse(raw_id) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected purchase request");
                return false;
            }
        };

        match self.store.mark_bought(id).await {
            Ok(true) => {
                tracing::info!(gift_id = %id, "Gift marked as bought");
                true
            }
            Ok(false) => {
                tracing::debug!(gift_id = %id, "Gift unknown or already bought");
                false
            }
            Err(e) => {
                tracing::error!(gift_id = %id, error = %e, "Failed to mark gift as bought");
                false
            }
        }
    }
}
