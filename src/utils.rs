use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{ArtistResult, ArtistTableRow, GroupMap, GroupTableRow};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Turns a bare track id into the URI form the playlist endpoints expect.
pub fn track_uri(id: &str) -> String {
    if id.starts_with("spotify:") {
        id.to_string()
    } else {
        format!("spotify:track:{}", id)
    }
}

pub fn group_table_rows(groups: &GroupMap) -> Vec<GroupTableRow> {
    groups
        .iter()
        .map(|(key, ids)| GroupTableRow {
            group: key.clone(),
            tracks: ids.len(),
        })
        .collect()
}

pub fn artist_table_rows(artists: &[ArtistResult]) -> Vec<ArtistTableRow> {
    artists
        .iter()
        .map(|a| ArtistTableRow {
            name: a.name.clone(),
            popularity: a.popularity.map(|p| p.to_string()).unwrap_or_default(),
            genres: a
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
        })
        .collect()
}
