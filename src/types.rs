use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Group key to ordered track ids.
pub type GroupMap = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// One entry of the saved tracks collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikedSongItem {
    pub added_at: DateTime<Utc>,
    pub track: Track,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<Artist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTracksPage {
    pub items: Vec<LikedSongItem>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlaylist {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedPlaylist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemsRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub artists: Option<SearchArtists>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtists {
    pub items: Vec<SearchArtist>,
}

/// Full artist object as returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtist {
    pub id: String,
    pub name: String,
    pub popularity: Option<u32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// Simplified artist returned to callers of the search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistResult {
    pub id: String,
    pub name: String,
    pub popularity: Option<u32>,
    pub genres: Vec<String>,
    pub image_url: Option<String>,
    pub spotify_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    #[default]
    Monthly,
    Quarterly,
    Semi,
    Yearly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Parameters of one period grouping pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodQuery {
    #[serde(default)]
    pub period: PeriodType,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    #[serde(default)]
    pub order: SortOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupPlaylistRequest {
    #[serde(default)]
    pub period: PeriodType,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub group_key: String,
    pub playlist_name: Option<String>,
    pub playlist_description: Option<String>,
    #[serde(default)]
    pub order: SortOrder,
}

impl CreateGroupPlaylistRequest {
    pub fn period_query(&self) -> PeriodQuery {
        PeriodQuery {
            period: self.period,
            start_year: self.start_year,
            end_year: self.end_year,
            order: self.order,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLanguagePlaylistRequest {
    pub language_code: String,
    pub playlist_name: Option<String>,
    #[serde(default = "default_min_songs")]
    pub min_songs: usize,
}

pub fn default_min_songs() -> usize {
    5
}

/// Outcome of materializing a group as a playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistResult {
    pub playlist_id: String,
    pub playlist_name: String,
    pub group_key: String,
    pub track_count: usize,
    pub playlist_url: String,
}

#[derive(Tabled)]
pub struct GroupTableRow {
    pub group: String,
    pub tracks: usize,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub popularity: String,
    pub genres: String,
}
