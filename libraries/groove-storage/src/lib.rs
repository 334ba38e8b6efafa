//! Groove Storage
//!
//! `SQLite` database layer for the Groove music library.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each entity owns its own queries (`artists`,
//!   `albums`, `genres`, `tracks`, `playlists`)
//! - **Declared Schema**: `schema` holds the foreign-key graph; clear and
//!   insert orders are derived from it
//! - **In-Memory Joins**: enriched listings run a fixed number of queries
//!   and stitch rows together through id-keyed maps
//! - **Seeding**: `seed` rebuilds the store from the fixture dataset in one
//!   transaction
//!
//! # Example
//!
//! ```rust,no_run
//! use groove_storage::{LocalStorageContext, create_pool, run_migrations};
//! use groove_core::storage::LibraryReader;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://groove.db").await?;
//! run_migrations(&pool).await?;
//!
//! let storage = LocalStorageContext::new(pool);
//! let tracks = storage.get_all_tracks().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod albums;
pub mod artists;
pub mod genres;
pub mod playlists;
pub mod tracks;

pub mod schema;
pub mod seed;

pub use context::LocalStorageContext;
pub use error::StorageError;

// Type alias used by the server
pub type Database = LocalStorageContext;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// Foreign keys are enforced on every connection; parents cannot be
/// removed while dependents still point at them.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://groove.db>`)
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool ready");

    Ok(pool)
}
