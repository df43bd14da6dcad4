//! # API Module
//!
//! HTTP endpoints of the spotime server. Handlers are thin: they obtain an
//! authenticated client from [`AppState`](crate::server::AppState), call into
//! [`crate::library`] and shape the JSON response. Errors are rendered by
//! [`Error`](crate::error::Error)'s `IntoResponse` impl (404 for unknown
//! groups, 400 for invalid selections, 401 without a token, 502 when Spotify
//! fails).
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - redirects to Spotify's authorize page with a PKCE challenge
//! - [`callback`] - exchanges the authorization code and caches the token
//! - [`get_token`] - returns the cached token
//!
//! ### Library
//!
//! - [`fetch_and_group`] - groups liked songs by period
//! - [`create_playlist_for_group`] - materializes one period group
//! - [`group_by_language`] - groups liked songs by detected language
//! - [`create_playlist_by_language`] - materializes one language group
//! - [`search_artists`] - artist search for autocomplete
//!
//! ### Monitoring
//!
//! - [`health`] - status and version

mod artists;
mod callback;
mod groups;
mod health;
mod languages;

pub use artists::search_artists;
pub use callback::{callback, get_token, login};
pub use groups::{create_playlist_for_group, fetch_and_group};
pub use health::health;
pub use languages::{create_playlist_by_language, group_by_language};
