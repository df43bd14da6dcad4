use crate::{
    error::{Error, Result},
    spotify::SpotifyApi,
    types::LikedSongItem,
};

/// Largest page the saved tracks endpoint accepts.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Walks the saved tracks collection page by page until it is exhausted.
///
/// The offset advances by the number of items actually received. The walk
/// stops on an empty page or on a page shorter than `page_size`. Items are
/// returned in the order the API delivers them (most recently liked first).
///
/// # Errors
///
/// Any failure of a page request is returned as is; pages already fetched
/// are discarded.
pub async fn fetch_all_liked_songs(
    api: &dyn SpotifyApi,
    page_size: u32,
) -> Result<Vec<LikedSongItem>> {
    if page_size == 0 {
        return Err(Error::InvalidRequest(
            "page size must be at least 1".to_string(),
        ));
    }

    let mut all_items = Vec::new();
    let mut offset: u32 = 0;

    loop {
        let page = api.current_user_saved_tracks(page_size, offset).await?;
        let received = page.items.len();
        if received == 0 {
            break;
        }

        all_items.extend(page.items);
        offset += received as u32;

        if received < page_size as usize {
            break;
        }
    }

    Ok(all_items)
}
