use tabled::Table;

use crate::{error, library, spotify::ClientProvider, utils, warning};

pub async fn list_artists(clients: &dyn ClientProvider, search: &str, limit: u32) {
    let api = match clients.client().await {
        Ok(api) => api,
        Err(e) => error!("{}\nPlease run spotime auth", e),
    };

    match library::search_artists(api.as_ref(), search, limit).await {
        Ok(artists) if artists.is_empty() => warning!("No artists found for '{}'", search),
        Ok(artists) => println!("{}", Table::new(utils::artist_table_rows(&artists))),
        Err(e) => error!("Artist search failed: {}", e),
    }
}
