use crate::{
    detect::LanguageDetector,
    types::{GroupMap, LikedSongItem, Track},
};

/// `"<track name> - <artist>, <artist>"`, the text handed to the detector.
pub fn detection_text(track: &Track) -> String {
    let artists = track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!("{} - {}", track.name, artists)
}

/// Buckets liked songs by the language detected from title and artists.
///
/// Groups keep the order in which tracks were seen. A track whose language
/// cannot be determined is left out of every group.
pub fn group_by_language(items: &[LikedSongItem], detector: &dyn LanguageDetector) -> GroupMap {
    let mut groups = GroupMap::new();

    for item in items {
        let text = detection_text(&item.track);
        match detector.detect(&text) {
            Ok(lang) => groups.entry(lang).or_default().push(item.track.id.clone()),
            Err(_) => continue, // skip if cannot detect
        }
    }

    groups
}
