//! Results of playlist mutations.
//!
//! Each variant maps to a distinct user-facing message. `is_success` collapses
//! the outcome back to a plain yes/no.

use crate::types::TrackId;
use serde::Serialize;

/// Outcome of removing a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlaylistRemoval {
    /// The playlist was empty and has been deleted
    Removed,
    /// The playlist still has member tracks; nothing changed
    NotEmpty { tracks: i64 },
    /// No playlist with that title
    NotFound,
}

impl PlaylistRemoval {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Removed)
    }
}

/// Outcome of adding a track to a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TrackAddition {
    /// Membership was created. `created` is true when the track row itself
    /// was new.
    Added { track_id: TrackId, created: bool },
    /// The track was already a member; nothing changed
    AlreadyPresent { track_id: TrackId },
    /// No playlist with that title; no track row was created
    PlaylistNotFound,
}

impl TrackAddition {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Added { .. })
    }

    pub fn track_id(self) -> Option<TrackId> {
        match self {
            Self::Added { track_id, .. } | Self::AlreadyPresent { track_id } => Some(track_id),
            Self::PlaylistNotFound => None,
        }
    }
}

/// Outcome of moving a track between playlists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TrackMove {
    /// Source membership removed, destination membership added
    Moved,
    /// The source playlist does not hold the track; nothing changed
    NotInSource,
    /// The destination already holds the track; the source is left untouched
    AlreadyInDestination,
    /// Source or destination playlist does not exist
    PlaylistNotFound,
    /// No track with that id
    TrackNotFound,
}

impl TrackMove {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Moved)
    }
}
