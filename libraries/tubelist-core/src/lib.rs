//! Tubelist Core
//!
//! Storage-agnostic domain types, the store trait, and the small pieces of
//! query logic shared by the storage layer and the web server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `NewTrack`, and the outcome enums returned by
//!   playlist mutations
//! - **Store Trait**: `PlaylistStore`, implemented by `tubelist-storage`
//! - **Query Helpers**: sorting/filtering parameters, pagination, and video id
//!   extraction for thumbnail and embed links
//! - **Error Handling**: Unified `TubelistError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tubelist_core::pagination::paginate;
//! use tubelist_core::video::youtube_id;
//!
//! let page = paginate((1..=37).collect::<Vec<_>>(), 3, 15);
//! assert_eq!(page.items.len(), 7);
//! assert_eq!(page.total_pages, 3);
//!
//! assert_eq!(
//!     youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
//!     Some("dQw4w9WgXcQ")
//! );
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod pagination;
pub mod storage;
pub mod types;
pub mod video;

// Re-export commonly used types
pub use error::{Result, TubelistError};
pub use pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
pub use storage::PlaylistStore;
pub use types::{
    NewTrack, PlaylistRemoval, SortDirection, SortField, Track, TrackAddition, TrackId, TrackMove,
    TrackQuery,
};
