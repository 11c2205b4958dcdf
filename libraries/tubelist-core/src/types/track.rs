/// Track domain types
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// A stored track
///
/// Tracks are unique by `(artist, title)`. `date` is free text and is never
/// parsed as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Track {
    pub id: TrackId,
    pub date: String,
    pub artist: String,
    pub title: String,
    pub url: String,
    pub play_count: i64,
}

/// Data for adding a track to a playlist
///
/// If a track with the same artist and title already exists, its row is
/// reused and `date`/`url` here are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrack {
    pub date: String,
    pub artist: String,
    pub title: String,
    pub url: String,
}

impl NewTrack {
    pub fn new(
        date: impl Into<String>,
        artist: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            artist: artist.into(),
            title: title.into(),
            url: url.into(),
        }
    }
}
