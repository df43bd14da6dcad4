use crate::{
    cli::fetch_library, detect::LanguageDetector, error, info, library,
    spotify::ClientProvider, success, types::PeriodQuery,
};

pub async fn playlist(
    clients: &dyn ClientProvider,
    query: PeriodQuery,
    group_key: &str,
    name: Option<String>,
    description: Option<String>,
) {
    let (api, songs) = fetch_library(clients).await;
    let groups = library::group_by_period(&songs, &query);

    info!("Create playlist for group {}", group_key);
    match library::create_playlist_for_group(
        api.as_ref(),
        &groups,
        group_key,
        name.as_deref(),
        description.as_deref(),
    )
    .await
    {
        Ok(p) => success!(
            "Playlist '{}' created with {} tracks: {}",
            p.playlist_name,
            p.track_count,
            p.playlist_url
        ),
        Err(e) => error!("Failed to create playlist: {}", e),
    }
}

pub async fn language_playlist(
    clients: &dyn ClientProvider,
    detector: &dyn LanguageDetector,
    language_code: &str,
    name: Option<String>,
    min_songs: usize,
) {
    let (api, songs) = fetch_library(clients).await;
    let groups = library::group_by_language(&songs, detector);

    info!("Create playlist for language {}", language_code);
    match library::create_playlist_for_language(
        api.as_ref(),
        &groups,
        language_code,
        name.as_deref(),
        min_songs,
    )
    .await
    {
        Ok(p) => success!(
            "Playlist '{}' created with {} tracks: {}",
            p.playlist_name,
            p.track_count,
            p.playlist_url
        ),
        Err(e) => error!("Failed to create playlist: {}", e),
    }
}
