//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for opening the
//! `SQLite` database and applying the schema. Entry points call this with
//! the resolved connection URL.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;
use std::time::Duration;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Sets up the `SQLite` connection pool and ensures the schema exists.
///
/// This function:
/// 1. Parses the connection URL
/// 2. Creates the database file (and its parent directory) if missing
/// 3. Creates the `gifts` table if it does not exist
///
/// Existing data is never dropped; seeding is left to
/// [`GiftStore::initialize`](giftlist_core::GiftStore::initialize).
///
/// # Errors
///
/// Returns an error if:
/// - The URL is not a valid `SQLite` URL
/// - The database file cannot be opened or created
/// - Schema creation fails
///
/// # Example
///
/// ```rust,no_run
/// use giftlist_db::setup_database;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database("sqlite://data/casamento_db.db").await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)
        .with_context(|| format!("Invalid SQLite URL: {url}"))?
        .create_if_missing(true)
        .busy_timeout(BUSY_TIMEOUT);

    // Ensure parent directory exists (in-memory databases have none)
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }
    }

    let pool = SqlitePool::connect_with(options)
        .await
        .with_context(|| format!("Failed to connect to database at {url}"))?;

    create_schema(&pool)
        .await
        .context("Failed to create database schema")?;

    tracing::debug!(url, "Database ready");
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Uses a single long-lived connection so the database survives for the
/// lifetime of the pool.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    use sqlx::sqlite::SqlitePoolOptions;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the database schema.
///
/// Safe to call multiple times as all operations use IF NOT EXISTS.
pub(crate) async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // AUTOINCREMENT keeps ids from ever being reused
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS gifts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL UNIQUE CHECK (length(trim(nome)) > 0),
            comprado BOOLEAN NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_database() {
        let pool = setup_test_database().await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM gifts")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_setup_database_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("gifts.db");
        let url = format!("sqlite://{}", db_path.display());

        let pool = setup_database(&url).await.unwrap();
        pool.close().await;

        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_setup_preserves_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("gifts.db").display());

        let pool = setup_database(&url).await.unwrap();
        sqlx::query("INSERT INTO gifts (nome, comprado) VALUES ('Cafeteira', 1)")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        let pool = setup_database(&url).await.unwrap();
        let (nome, comprado): (String, bool) =
            sqlx::query_as("SELECT nome, comprado FROM gifts WHERE id = 1")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(nome, "Cafeteira");
        assert!(comprado);
    }

    #[tokio::test]
    async fn test_setup_rejects_invalid_url() {
        assert!(setup_database("postgres://localhost/gifts").await.is_err());
    }
}
