/// Core error types for Tubelist
use thiserror::Error;

/// Result type alias using `TubelistError`
pub type Result<T> = std::result::Result<T, TubelistError>;

/// Core error type for Tubelist
///
/// Absent playlists and tracks are not errors: store operations report them
/// through empty results or outcome variants. What remains here is the
/// storage layer failing outright.
#[derive(Error, Debug)]
pub enum TubelistError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl TubelistError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for TubelistError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
