use crate::{
    error::{Error, Result},
    spotify::SpotifyApi,
    types::{GroupMap, NewPlaylist, PlaylistResult},
};

/// Most items the add-items endpoint takes in one call.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Appends `track_ids` to a playlist in sequential batches of `chunk_size`.
///
/// Batches are sent in order, one at a time, so the playlist ends up in the
/// same order as `track_ids`. Returns the number of tracks added.
///
/// # Errors
///
/// A failing batch stops the run and yields [`Error::PartialPlaylist`] with
/// the number of tracks committed by earlier batches. Nothing is rolled back.
pub async fn add_tracks_in_chunks(
    api: &dyn SpotifyApi,
    playlist_id: &str,
    track_ids: &[String],
    chunk_size: usize,
) -> Result<usize> {
    if chunk_size == 0 {
        return Err(Error::InvalidRequest(
            "batch size must be at least 1".to_string(),
        ));
    }

    let mut committed = 0;
    for chunk in track_ids.chunks(chunk_size) {
        if let Err(e) = api.playlist_add_items(playlist_id, chunk).await {
            return Err(Error::PartialPlaylist {
                playlist_id: playlist_id.to_string(),
                committed,
                total: track_ids.len(),
                reason: e.to_string(),
            });
        }
        committed += chunk.len();
    }

    Ok(committed)
}

/// Creates a private playlist holding the tracks of one period group.
///
/// Defaults: name `Liked Songs - {group_key}`, description
/// `Liked songs for period {group_key}`.
///
/// # Errors
///
/// - [`Error::NotFound`] when `group_key` is not in `groups`
/// - [`Error::InvalidRequest`] when the group holds no tracks
/// - anything the API reports while creating or filling the playlist
pub async fn create_playlist_for_group(
    api: &dyn SpotifyApi,
    groups: &GroupMap,
    group_key: &str,
    name: Option<&str>,
    description: Option<&str>,
) -> Result<PlaylistResult> {
    let track_ids = groups
        .get(group_key)
        .ok_or_else(|| Error::NotFound(format!("Group '{}' not found.", group_key)))?;

    if track_ids.is_empty() {
        return Err(Error::InvalidRequest("No tracks in this group.".to_string()));
    }

    let name = name
        .map(str::to_string)
        .unwrap_or_else(|| format!("Liked Songs - {}", group_key));
    let description = description
        .map(str::to_string)
        .unwrap_or_else(|| format!("Liked songs for period {}", group_key));

    materialize(api, group_key, track_ids, name, description).await
}

/// Creates a private playlist holding the tracks detected as one language.
///
/// The code is matched case-insensitively against the lowercase codes the
/// detector produces. Defaults: name `Liked Songs – {CODE}`, description
/// `Liked songs detected as {CODE}`.
///
/// # Errors
///
/// - [`Error::NotFound`] when no track was detected as `language_code`
/// - [`Error::InvalidRequest`] when the group is empty or holds fewer than
///   `min_songs` tracks
pub async fn create_playlist_for_language(
    api: &dyn SpotifyApi,
    groups: &GroupMap,
    language_code: &str,
    name: Option<&str>,
    min_songs: usize,
) -> Result<PlaylistResult> {
    let code = language_code.trim().to_lowercase();
    let track_ids = groups
        .get(&code)
        .ok_or_else(|| Error::NotFound("No songs detected for this language".to_string()))?;

    if track_ids.is_empty() {
        return Err(Error::InvalidRequest("No tracks in this group.".to_string()));
    }
    if track_ids.len() < min_songs {
        return Err(Error::InvalidRequest(format!(
            "Not enough songs to create a playlist ({} of {} required)",
            track_ids.len(),
            min_songs
        )));
    }

    let upper = code.to_uppercase();
    let name = name
        .map(str::to_string)
        .unwrap_or_else(|| format!("Liked Songs – {}", upper));
    let description = format!("Liked songs detected as {}", upper);

    materialize(api, &code, track_ids, name, description).await
}

async fn materialize(
    api: &dyn SpotifyApi,
    key: &str,
    track_ids: &[String],
    name: String,
    description: String,
) -> Result<PlaylistResult> {
    let me = api.current_user().await?;

    let playlist = api
        .user_playlist_create(
            &me.id,
            &NewPlaylist {
                name: name.clone(),
                description,
                public: false,
            },
        )
        .await?;

    let track_count = add_tracks_in_chunks(api, &playlist.id, track_ids, DEFAULT_BATCH_SIZE).await?;

    let playlist_url = playlist
        .external_urls
        .spotify
        .unwrap_or_else(|| format!("https://open.spotify.com/playlist/{}", playlist.id));

    Ok(PlaylistResult {
        playlist_id: playlist.id,
        playlist_name: name,
        group_key: key.to_string(),
        track_count,
        playlist_url,
    })
}
