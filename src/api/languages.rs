use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::{Value, json};

use crate::{
    error::{Error, Result},
    library,
    server::AppState,
    spotify::SpotifyApi,
    types::{CreateLanguagePlaylistRequest, GroupMap},
};

/// Fetches the library and groups it by language off the async runtime;
/// detection is CPU bound.
async fn language_groups(state: &AppState) -> Result<(Arc<dyn SpotifyApi>, GroupMap)> {
    let api = state.clients.client().await?;
    let songs = library::fetch_all_liked_songs(api.as_ref(), library::DEFAULT_PAGE_SIZE).await?;

    let detector = Arc::clone(&state.detector);
    let groups =
        tokio::task::spawn_blocking(move || library::group_by_language(&songs, detector.as_ref()))
            .await
            .map_err(|e| Error::Upstream(format!("language detection failed: {}", e)))?;

    Ok((api, groups))
}

pub async fn group_by_language(State(state): State<AppState>) -> Result<Json<Value>> {
    let (_, groups) = language_groups(&state).await?;
    Ok(Json(json!({ "groups": groups })))
}

pub async fn create_playlist_by_language(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateLanguagePlaylistRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(payload) = payload?;
    let (api, groups) = language_groups(&state).await?;

    let playlist = library::create_playlist_for_language(
        api.as_ref(),
        &groups,
        &payload.language_code,
        payload.playlist_name.as_deref(),
        payload.min_songs,
    )
    .await?;

    Ok(Json(json!({
        "message": "Playlist created",
        "playlist_id": playlist.playlist_id,
        "playlist_name": playlist.playlist_name,
        "language": playlist.group_key,
        "track_count": playlist.track_count,
        "playlist_url": playlist.playlist_url,
    })))
}
