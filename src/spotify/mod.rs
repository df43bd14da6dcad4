//! # Spotify Integration Module
//!
//! The core never talks HTTP itself. It receives a [`SpotifyApi`]
//! implementation and calls the handful of Web API operations it needs
//! through it:
//!
//! ```text
//! library (fetch, group, materialize, search)
//!          ↓
//! SpotifyApi trait  ←  ClientProvider (one client per request)
//!          ↓
//! WebApiClient (reqwest, retry on 502 / 429)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: authorize URL, code exchange, refresh
//!   and the interactive terminal login.
//! - [`client`] - [`WebApiClient`], the `reqwest` implementation of
//!   [`SpotifyApi`], and [`CachedTokenProvider`], which builds one from the
//!   token cache.
//!
//! ## Endpoints used
//!
//! - `GET /me/tracks` - saved tracks, offset paginated
//! - `GET /me` - current user id
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - append up to 100 items
//! - `GET /search?type=artist` - artist search

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{CreatedPlaylist, CurrentUser, NewPlaylist, SavedTracksPage, SearchArtist},
};

pub mod auth;
pub mod client;

pub use client::{CachedTokenProvider, WebApiClient};

/// The authenticated Web API operations the core depends on.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// One page of the current user's saved tracks, most recent first.
    async fn current_user_saved_tracks(&self, limit: u32, offset: u32) -> Result<SavedTracksPage>;

    async fn current_user(&self) -> Result<CurrentUser>;

    async fn user_playlist_create(
        &self,
        user_id: &str,
        playlist: &NewPlaylist,
    ) -> Result<CreatedPlaylist>;

    /// Appends `track_ids` to the end of the playlist in the given order.
    async fn playlist_add_items(&self, playlist_id: &str, track_ids: &[String]) -> Result<()>;

    async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<SearchArtist>>;
}

/// Hands out an authenticated client for the duration of one request.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    async fn client(&self) -> Result<Arc<dyn SpotifyApi>>;
}
