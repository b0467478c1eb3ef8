//! # welfare-db
//!
//! libSQL record store for the welfare tracker.
//!
//! Holds animals, the seeded questionnaire, evaluations and their responses.
//! [`service::WelfareService`] hosts the repository methods and implements
//! the engine's [`RecordStore`](welfare_core::store::RecordStore) seam.
//! [`photos::PhotoStore`] keeps uploaded animal photos on the local disk.

pub mod error;
pub mod helpers;
mod migrations;
pub mod photos;
pub mod repos;
pub mod service;
mod store;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and its single connection, and generates IDs.
pub struct WelfareDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl WelfareDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations and seeds the questionnaire on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path != ":memory:" {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let welfare_db = Self { db, conn };
        welfare_db.run_migrations().await?;
        tracing::debug!(path, "opened welfare database");
        Ok(welfare_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"ani-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
