//! Tubelist Storage
//!
//! `SQLite` database layer for Tubelist.
//!
//! Three tables: `tracks`, `playlists`, and the `playlist_tracks` join between
//! them. Each feature owns its own queries (vertical slices); `LocalStore`
//! wires them to the `PlaylistStore` trait from `tubelist-core`.
//!
//! Every operation borrows a connection from the pool for its own duration.
//! Multi-step operations run inside a single transaction, which rolls back
//! if it is dropped before commit.
//!
//! # Example
//!
//! ```rust,no_run
//! use tubelist_core::{NewTrack, PlaylistStore};
//! use tubelist_storage::LocalStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = LocalStore::connect("sqlite://playlists.db").await?;
//!
//! store.create_playlist("Favorites").await?;
//! store
//!     .add_track_to_playlist(
//!         "Favorites",
//!         NewTrack::new("2024-01-01", "Artist", "Title", "https://youtu.be/dQw4w9WgXcQ"),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod playlists;
pub mod tracks;

pub use context::LocalStore;
pub use error::StorageError;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Default pool size
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://playlists.db`)
/// * `max_connections` - Upper bound on pooled connections. In-memory
///   databases are always limited to one connection, since each connection
///   would otherwise see its own empty database.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let in_memory = database_url.contains(":memory:");

    let mut options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(std::time::Duration::from_secs(30));

    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let max_connections = if in_memory { 1 } else { max_connections.max(1) };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    tracing::debug!(max_connections, "SQLite pool created");

    Ok(pool)
}
