use crate::{
    error::Result,
    spotify::SpotifyApi,
    types::{ArtistResult, SearchArtist},
};

/// Searches artists by name and projects them to [`ArtistResult`].
///
/// A blank query returns an empty list without calling the API. Order and
/// limit are whatever Spotify returns.
pub async fn search_artists(
    api: &dyn SpotifyApi,
    query: &str,
    limit: u32,
) -> Result<Vec<ArtistResult>> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let artists = api.search_artists(query, limit).await?;
    Ok(artists.into_iter().map(ArtistResult::from).collect())
}

impl From<SearchArtist> for ArtistResult {
    fn from(a: SearchArtist) -> Self {
        ArtistResult {
            image_url: a.images.into_iter().next().map(|i| i.url),
            spotify_url: a.external_urls.spotify.unwrap_or_default(),
            id: a.id,
            name: a.name,
            popularity: a.popularity,
            genres: a.genres,
        }
    }
}
