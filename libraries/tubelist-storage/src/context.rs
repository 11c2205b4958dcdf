use crate::{create_pool, playlists, run_migrations, tracks, StorageError};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tubelist_core::{
    error::Result, storage::PlaylistStore, NewTrack, PlaylistRemoval, Track, TrackAddition,
    TrackId, TrackMove, TrackQuery,
};

/// Local storage using `SQLite`
#[derive(Clone)]
pub struct LocalStore {
    pool: SqlitePool,
}

impl LocalStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database at `database_url` and bring the
    /// schema up to date.
    pub async fn connect(database_url: &str) -> std::result::Result<Self, StorageError> {
        Self::connect_with(database_url, crate::DEFAULT_MAX_CONNECTIONS).await
    }

    pub async fn connect_with(
        database_url: &str,
        max_connections: u32,
    ) -> std::result::Result<Self, StorageError> {
        let pool = create_pool(database_url, max_connections).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PlaylistStore for LocalStore {
    // Playlists
    async fn list_playlists(&self) -> Result<Vec<String>> {
        playlists::list_titles(&self.pool).await
    }

    async fn playlist_exists(&self, title: &str) -> Result<bool> {
        playlists::exists(&self.pool, title).await
    }

    async fn read_playlist(&self, title: &str, query: &TrackQuery) -> Result<Vec<Track>> {
        playlists::read(&self.pool, title, query).await
    }

    async fn create_playlist(&self, title: &str) -> Result<bool> {
        playlists::create(&self.pool, title).await
    }

    async fn remove_playlist(&self, title: &str) -> Result<PlaylistRemoval> {
        playlists::remove(&self.pool, title).await
    }

    // Membership
    async fn add_track_to_playlist(&self, title: &str, track: NewTrack) -> Result<TrackAddition> {
        playlists::add_track(&self.pool, title, track).await
    }

    async fn remove_track_from_playlist(&self, track_id: TrackId, title: &str) -> Result<bool> {
        playlists::remove_track(&self.pool, track_id, title).await
    }

    async fn move_track(&self, track_id: TrackId, from: &str, to: &str) -> Result<TrackMove> {
        playlists::move_track(&self.pool, track_id, from, to).await
    }

    // Tracks
    async fn random_track(&self) -> Result<Option<Track>> {
        tracks::random(&self.pool).await
    }

    async fn get_track(&self, id: TrackId) -> Result<Option<Track>> {
        tracks::get_by_id(&self.pool, id).await
    }

    async fn track_count(&self) -> Result<i64> {
        tracks::count(&self.pool).await
    }

    async fn increment_play_count(&self, id: TrackId) -> Result<bool> {
        tracks::increment_play_count(&self.pool, id).await
    }
}
