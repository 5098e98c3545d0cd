//! `SQLite` implementation of the `GiftStore` trait.

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use giftlist_core::{Gift, GiftId, GiftStore, RepositoryError, SeedCatalog};

use crate::setup::create_schema;

/// SQLite result codes that mean the database itself is out of reach.
const SQLITE_BUSY: &str = "5";
const SQLITE_CANTOPEN: &str = "14";

/// `SQLite` implementation of the `GiftStore` trait.
///
/// Every call checks a connection out of the pool for the duration of
/// a single statement or transaction.
pub struct SqliteGiftStore {
    pool: SqlitePool,
}

impl SqliteGiftStore {
    /// Create a new `SQLite` gift store.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GiftRow {
    id: i64,
    nome: String,
    comprado: bool,
}

/// Convert a `GiftRow` to domain `Gift`.
fn row_to_gift(row: GiftRow) -> Result<Gift, RepositoryError> {
    let id = GiftId::new(row.id)
        .map_err(|e| RepositoryError::Serialization(format!("Corrupt gift row: {e}")))?;
    Ok(Gift {
        id,
        name: row.nome,
        bought: row.comprado,
    })
}

/// Map `SQLx` errors to `RepositoryError`.
fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => RepositoryError::Unavailable(e.to_string()),
        sqlx::Error::Database(db)
            if matches!(db.code().as_deref(), Some(SQLITE_BUSY | SQLITE_CANTOPEN)) =>
        {
            RepositoryError::Unavailable(e.to_string())
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryError::Serialization(e.to_string())
        }
        _ => RepositoryError::Storage(e.to_string()),
    }
}

/// Insert the catalog when the table is empty. Runs inside the caller's transaction.
async fn seed_if_empty(
    conn: &mut SqliteConnection,
    catalog: &SeedCatalog,
) -> Result<usize, RepositoryError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM gifts")
        .fetch_one(&mut *conn)
        .await
        .map_err(map_sqlx_error)?;

    if count > 0 {
        tracing::debug!(count, "gifts table already populated");
        return Ok(0);
    }

    let mut inserted = 0;
    for name in catalog.names() {
        let result = sqlx::query(
            "INSERT INTO gifts (nome, comprado) VALUES (?, 0) ON CONFLICT (nome) DO NOTHING",
        )
        .bind(name)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx_error)?;
        inserted += usize::try_from(result.rows_affected()).unwrap_or(0);
    }

    Ok(inserted)
}

#[async_trait]
impl GiftStore for SqliteGiftStore {
    async fn initialize(&self, catalog: &SeedCatalog) -> Result<usize, RepositoryError> {
        create_schema(&self.pool).await.map_err(|e| match map_sqlx_error(e) {
            unavailable @ RepositoryError::Unavailable(_) => unavailable,
            other => RepositoryError::Schema(other.to_string()),
        })?;

        let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;

        // Take the write lock up front so a concurrent seeder waits on busy_timeout
        sqlx::query("BEGIN IMMEDIATE")
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        let outcome = seed_if_empty(&mut conn, catalog).await;
        let finish = if outcome.is_ok() { "COMMIT" } else { "ROLLBACK" };
        if let Err(e) = sqlx::query(finish).execute(&mut *conn).await {
            if outcome.is_ok() {
                return Err(map_sqlx_error(e));
            }
            tracing::warn!(error = %e, "Failed to roll back seeding transaction");
        }

        outcome
    }

    async fn list_all(&self) -> Result<Vec<Gift>, RepositoryError> {
        let rows = sqlx::query_as::<_, GiftRow>("SELECT id, nome, comprado FROM gifts ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(row_to_gift).collect()
    }

    async fn mark_bought(&self, id: GiftId) -> Result<bool, RepositoryError> {
        // The conditional WHERE makes the check and the flip one statement
        let result = sqlx::query("UPDATE gifts SET comprado = 1 WHERE id = ? AND comprado = 0")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }
}
