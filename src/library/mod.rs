//! # Library Module
//!
//! Everything that operates on the liked-songs library: fetching it,
//! splitting it into groups and turning a group into a playlist.
//!
//! ```text
//! fetch_all_liked_songs
//!     ├── group_by_period    (monthly, quarterly, semi, yearly)
//!     └── group_by_language  (detected language code)
//!              ↓  caller picks a group key
//! create_playlist_for_group / create_playlist_for_language
//! ```
//!
//! Grouping functions are pure: the same snapshot and parameters always give
//! the same [`GroupMap`](crate::types::GroupMap). Nothing is cached between
//! calls; every request fetches the library again.
//!
//! All remote work goes through a [`SpotifyApi`](crate::spotify::SpotifyApi)
//! passed in by the caller, strictly one call at a time.

mod fetch;
mod language;
mod period;
mod playlist;
mod search;

pub use fetch::{DEFAULT_PAGE_SIZE, fetch_all_liked_songs};
pub use language::{detection_text, group_by_language};
pub use period::{group_by_period, period_key};
pub use playlist::{
    DEFAULT_BATCH_SIZE, add_tracks_in_chunks, create_playlist_for_group,
    create_playlist_for_language,
};
pub use search::search_artists;
