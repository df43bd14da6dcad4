//! # CLI Module
//!
//! Terminal front end for spotime. Every command fetches the liked-songs
//! library fresh, runs the requested grouping and prints the outcome;
//! nothing is cached apart from the OAuth token.
//!
//! ## Commands
//!
//! - [`auth`] - OAuth 2.0 PKCE login through the browser
//! - [`serve`] - runs the HTTP server
//! - [`groups`] - period groups as a table
//! - [`languages`] - language groups as a table
//! - [`playlist`] - playlist from one period group
//! - [`language_playlist`] - playlist from one language group
//! - [`list_artists`] - artist search
//!
//! ```bash
//! spotime auth
//! spotime groups --period quarterly --start-year 2024
//! spotime playlist "2024(1-3)" --period quarterly
//! spotime language-playlist it --min-songs 10
//! ```
//!
//! Fatal failures are reported with the `error!` macro, which exits the
//! process.

use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, library,
    spotify::{ClientProvider, SpotifyApi},
    types::LikedSongItem,
};

mod artists;
mod auth;
mod groups;
mod languages;
mod playlist;

pub use artists::list_artists;
pub use auth::{auth, serve};
pub use groups::groups;
pub use languages::languages;
pub use playlist::{language_playlist, playlist};

/// Fetches the whole library behind a spinner. Exits on failure.
async fn fetch_library(clients: &dyn ClientProvider) -> (Arc<dyn SpotifyApi>, Vec<LikedSongItem>) {
    let api = match clients.client().await {
        Ok(api) => api,
        Err(e) => error!("{}\nPlease run spotime auth", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching liked songs...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let songs = match library::fetch_all_liked_songs(api.as_ref(), library::DEFAULT_PAGE_SIZE).await
    {
        Ok(songs) => songs,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch liked songs: {}", e)
        }
    };

    pb.finish_and_clear();
    (api, songs)
}
