//! Store trait for playlists and tracks

use crate::error::Result;
use crate::types::{NewTrack, PlaylistRemoval, Track, TrackAddition, TrackId, TrackMove, TrackQuery};
use async_trait::async_trait;

/// Persistent playlist storage
///
/// Missing playlists and tracks never produce an `Err`: reads return empty
/// results and mutations return `false` or a "not found" outcome. `Err` means
/// the underlying storage failed.
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    // ========================================================================
    // Playlists
    // ========================================================================

    /// Titles of all playlists in storage order
    async fn list_playlists(&self) -> Result<Vec<String>>;

    /// Whether a playlist with exactly this title exists
    async fn playlist_exists(&self, title: &str) -> Result<bool>;

    /// Member tracks of a playlist, filtered and sorted by `query`
    async fn read_playlist(&self, title: &str, query: &TrackQuery) -> Result<Vec<Track>>;

    /// Create a playlist. Returns `false` if the title is already taken.
    async fn create_playlist(&self, title: &str) -> Result<bool>;

    /// Delete a playlist, refusing while it still has members
    async fn remove_playlist(&self, title: &str) -> Result<PlaylistRemoval>;

    // ========================================================================
    // Membership
    // ========================================================================

    /// Add a track to a playlist, reusing any track with the same artist
    /// and title
    async fn add_track_to_playlist(&self, title: &str, track: NewTrack) -> Result<TrackAddition>;

    /// Remove a track from a playlist. Returns whether a membership existed.
    async fn remove_track_from_playlist(&self, track_id: TrackId, title: &str) -> Result<bool>;

    /// Move a track from one playlist to another.
    ///
    /// If the destination already holds the track nothing is changed, so the
    /// source membership is never lost.
    async fn move_track(&self, track_id: TrackId, from: &str, to: &str) -> Result<TrackMove>;

    // ========================================================================
    // Tracks
    // ========================================================================

    /// A uniformly sampled track, or `None` when there are no tracks
    async fn random_track(&self) -> Result<Option<Track>>;

    /// Get track by ID
    async fn get_track(&self, id: TrackId) -> Result<Option<Track>>;

    /// Number of stored tracks, including ones in no playlist
    async fn track_count(&self) -> Result<i64>;

    /// Bump the play counter. Returns `false` for an unknown track.
    async fn increment_play_count(&self, id: TrackId) -> Result<bool>;
}
