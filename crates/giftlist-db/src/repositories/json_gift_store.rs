//! JSON-file implementation of the `GiftStore` trait.
//!
//! The file holds a pretty-printed array of `{"id", "nome", "comprado"}`
//! objects. Every operation reads the file under a store-wide lock, and
//! mutations replace it atomically (temp file + rename), so readers never
//! observe a half-written file and two purchases of the same gift cannot
//! both succeed.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use giftlist_core::{Gift, GiftId, GiftStore, RepositoryError, SeedCatalog};

/// JSON-file implementation of the `GiftStore` trait.
pub struct JsonGiftStore {
    path: PathBuf,
    /// Serializes every read-modify-write against the file.
    lock: Mutex<()>,
}

impl JsonGiftStore {
    /// Create a store backed by the file at `path`.
    ///
    /// Nothing touches the filesystem until [`GiftStore::initialize`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn read_entries(&self) -> Result<Vec<GiftEntry>, RepositoryError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| unavailable(&self.path, &e))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            RepositoryError::Serialization(format!("{}: {e}", self.path.display()))
        })
    }

    async fn write_entries(&self, entries: &[GiftEntry]) -> Result<(), RepositoryError> {
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let temp_path = temp_path_for(&self.path);
        fs::write(&temp_path, json)
            .await
            .map_err(|e| unavailable(&temp_path, &e))?;

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(unavailable(&self.path, &e));
        }

        Ok(())
    }
}

/// On-disk record layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GiftEntry {
    id: i64,
    nome: String,
    comprado: bool,
}

/// Convert a `GiftEntry` to domain `Gift`.
fn entry_to_gift(entry: GiftEntry) -> Result<Gift, RepositoryError> {
    let id = GiftId::new(entry.id)
        .map_err(|e| RepositoryError::Serialization(format!("Corrupt gift entry: {e}")))?;
    Ok(Gift {
        id,
        name: entry.nome,
        bought: entry.comprado,
    })
}

fn unavailable(path: &Path, e: &io::Error) -> RepositoryError {
    RepositoryError::Unavailable(format!("{}: {e}", path.display()))
}

/// Sibling temp file used for atomic replacement.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[async_trait]
impl GiftStore for JsonGiftStore {
    async fn initialize(&self, catalog: &SeedCatalog) -> Result<usize, RepositoryError> {
        let _guard = self.lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    RepositoryError::Schema(format!("{}: {e}", parent.display()))
                })?;
            }
        }

        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|e| unavailable(&self.path, &e))?;
        if !exists {
            self.write_entries(&[])
                .await
                .map_err(|e| RepositoryError::Schema(e.to_string()))?;
        }

        let existing = self.read_entries().await?;
        if !existing.is_empty() {
            tracing::debug!(count = existing.len(), path = %self.path.display(), "gift file already populated");
            return Ok(0);
        }

        let entries: Vec<GiftEntry> = catalog
            .names()
            .iter()
            .zip(1_i64..)
            .map(|(name, id)| GiftEntry {
                id,
                nome: name.clone(),
                comprado: false,
            })
            .collect();

        self.write_entries(&entries).await?;
        Ok(entries.len())
    }

    async fn list_all(&self) -> Result<Vec<Gift>, RepositoryError> {
        let mut entries = {
            let _guard = self.lock.lock().await;
            self.read_entries().await?
        };

        entries.sort_by_key(|entry| entry.id);
        entries.into_iter().map(entry_to_gift).collect()
    }

    async fn mark_bought(&self, id: GiftId) -> Result<bool, RepositoryError> {
        let _guard = self.lock.lock().await;

        let mut entries = self.read_entries().await?;
        let Some(entry) = entries
            .iter_mut()
            .find(|entry| entry.id == id.get() && !entry.comprado)
        else {
            return Ok(false);
        };

        entry.comprado = true;
        self.write_entries(&entries).await?;
        Ok(true)
    }
}
