//! Video identifier extraction for thumbnail and embed links.
//!
//! Stored URLs are never rewritten; these helpers only feed presentation.

use once_cell::sync::Lazy;
use regex::Regex;

static VIDEO_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap());

/// Extract the 11-character video id from a YouTube-style URL.
///
/// Returns the first run of 11 id characters that follows `v=` or `/`.
pub fn youtube_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Thumbnail image for a video id
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/0.jpg")
}
