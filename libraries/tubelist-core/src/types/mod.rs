mod ids;
mod outcome;
mod query;
mod track;

pub use ids::TrackId;
pub use outcome::{PlaylistRemoval, TrackAddition, TrackMove};
pub use query::{SortDirection, SortField, TrackQuery};
pub use track::{NewTrack, Track};
