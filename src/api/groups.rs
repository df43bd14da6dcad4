use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use serde_json::{Value, json};

use crate::{
    error::Result,
    library,
    server::AppState,
    types::{CreateGroupPlaylistRequest, PeriodQuery},
};

pub async fn fetch_and_group(
    State(state): State<AppState>,
    query: std::result::Result<Query<PeriodQuery>, QueryRejection>,
) -> Result<Json<Value>> {
    let Query(query) = query?;
    let api = state.clients.client().await?;
    let songs = library::fetch_all_liked_songs(api.as_ref(), library::DEFAULT_PAGE_SIZE).await?;
    let groups = library::group_by_period(&songs, &query);

    Ok(Json(json!({
        "groups": groups,
        "total_songs": songs.len(),
    })))
}

pub async fn create_playlist_for_group(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateGroupPlaylistRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(payload) = payload?;
    let api = state.clients.client().await?;
    let songs = library::fetch_all_liked_songs(api.as_ref(), library::DEFAULT_PAGE_SIZE).await?;
    let groups = library::group_by_period(&songs, &payload.period_query());

    let playlist = library::create_playlist_for_group(
        api.as_ref(),
        &groups,
        &payload.group_key,
        payload.playlist_name.as_deref(),
        payload.playlist_description.as_deref(),
    )
    .await?;

    Ok(Json(json!({
        "message": "Playlist created",
        "playlist_id": playlist.playlist_id,
        "playlist_name": playlist.playlist_name,
        "group_key": playlist.group_key,
        "track_count": playlist.track_count,
        "playlist_url": playlist.playlist_url,
    })))
}
