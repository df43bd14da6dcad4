#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc, sync::Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use spotime::{
    detect::{DetectionError, LanguageDetector},
    error::{Error, Result},
    spotify::{ClientProvider, SpotifyApi},
    types::{
        Artist, CreatedPlaylist, CurrentUser, ExternalUrls, LikedSongItem, NewPlaylist,
        SavedTracksPage, SearchArtist, Track,
    },
};

// Helper function to create a liked song
pub fn liked(id: &str, added_at: &str) -> LikedSongItem {
    song(id, added_at, &format!("Song {}", id), &["Artist"])
}

pub fn song(id: &str, added_at: &str, name: &str, artists: &[&str]) -> LikedSongItem {
    LikedSongItem {
        added_at: ts(added_at),
        track: Track {
            id: id.to_string(),
            name: name.to_string(),
            artists: artists
                .iter()
                .map(|a| Artist {
                    name: a.to_string(),
                })
                .collect(),
        },
    }
}

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

/// `count` songs all added at the same instant, ids prefixed with `prefix`.
pub fn page(prefix: &str, count: usize) -> Vec<LikedSongItem> {
    (0..count)
        .map(|i| liked(&format!("{}{}", prefix, i), "2024-05-01T12:00:00Z"))
        .collect()
}

pub fn ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("t{}", i)).collect()
}

/// In-memory stand-in for the Spotify Web API that records every call.
#[derive(Default)]
pub struct FakeSpotify {
    pub pages: Vec<Vec<LikedSongItem>>,
    pub fail_page: Option<usize>,
    pub fail_add_call: Option<usize>,
    pub artists: Vec<SearchArtist>,

    pub page_requests: Mutex<Vec<(u32, u32)>>,
    pub created: Mutex<Vec<(String, NewPlaylist)>>,
    pub added: Mutex<Vec<Vec<String>>>,
    pub searches: Mutex<Vec<(String, u32)>>,
}

impl FakeSpotify {
    pub fn with_pages(pages: Vec<Vec<LikedSongItem>>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    /// Serves `songs` as one library, paged by the requested limit.
    pub fn with_library(songs: Vec<LikedSongItem>, page_size: usize) -> Self {
        let mut pages: Vec<Vec<LikedSongItem>> =
            songs.chunks(page_size).map(|c| c.to_vec()).collect();
        if songs.len() % page_size == 0 {
            pages.push(Vec::new());
        }
        Self::with_pages(pages)
    }

    pub fn added_batches(&self) -> Vec<Vec<String>> {
        self.added.lock().unwrap().clone()
    }

    pub fn created_playlists(&self) -> Vec<(String, NewPlaylist)> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    async fn current_user_saved_tracks(&self, limit: u32, offset: u32) -> Result<SavedTracksPage> {
        let mut requests = self.page_requests.lock().unwrap();
        let index = requests.len();
        requests.push((limit, offset));

        if self.fail_page == Some(index) {
            return Err(Error::Upstream("502 Bad Gateway".to_string()));
        }

        Ok(SavedTracksPage {
            items: self.pages.get(index).cloned().unwrap_or_default(),
            total: None,
        })
    }

    async fn current_user(&self) -> Result<CurrentUser> {
        Ok(CurrentUser {
            id: "listener".to_string(),
            display_name: None,
        })
    }

    async fn user_playlist_create(
        &self,
        user_id: &str,
        playlist: &NewPlaylist,
    ) -> Result<CreatedPlaylist> {
        self.created
            .lock()
            .unwrap()
            .push((user_id.to_string(), playlist.clone()));

        Ok(CreatedPlaylist {
            id: "pl1".to_string(),
            name: playlist.name.clone(),
            external_urls: ExternalUrls {
                spotify: Some("https://open.spotify.com/playlist/pl1".to_string()),
            },
        })
    }

    async fn playlist_add_items(&self, _playlist_id: &str, track_ids: &[String]) -> Result<()> {
        let mut added = self.added.lock().unwrap();
        if self.fail_add_call == Some(added.len()) {
            return Err(Error::Upstream("429 Too Many Requests".to_string()));
        }
        added.push(track_ids.to_vec());
        Ok(())
    }

    async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<SearchArtist>> {
        self.searches
            .lock()
            .unwrap()
            .push((query.to_string(), limit));
        Ok(self.artists.clone())
    }
}

pub struct FakeProvider {
    pub api: Option<Arc<FakeSpotify>>,
}

impl FakeProvider {
    pub fn new(api: FakeSpotify) -> Self {
        Self {
            api: Some(Arc::new(api)),
        }
    }

    pub fn unauthorized() -> Self {
        Self { api: None }
    }
}

#[async_trait]
impl ClientProvider for FakeProvider {
    async fn client(&self) -> Result<Arc<dyn SpotifyApi>> {
        match &self.api {
            Some(api) => Ok(Arc::clone(api) as Arc<dyn SpotifyApi>),
            None => Err(Error::Unauthorized("No Spotify token found.".to_string())),
        }
    }
}

/// Detects languages from a fixed table of detection texts.
#[derive(Default)]
pub struct FakeDetector {
    pub languages: HashMap<String, String>,
}

impl FakeDetector {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            languages: entries
                .iter()
                .map(|(text, lang)| (text.to_string(), lang.to_string()))
                .collect(),
        }
    }
}

impl LanguageDetector for FakeDetector {
    fn detect(&self, text: &str) -> std::result::Result<String, DetectionError> {
        self.languages
            .get(text)
            .cloned()
            .ok_or(DetectionError::Undetermined)
    }
}
