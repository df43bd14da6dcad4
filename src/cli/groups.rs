use tabled::Table;

use crate::{
    cli::fetch_library, info, library, spotify::ClientProvider, types::PeriodQuery, utils,
};

/// Prints the period groups of the library, optionally with their track ids.
pub async fn groups(clients: &dyn ClientProvider, query: PeriodQuery, show_tracks: bool) {
    let (_, songs) = fetch_library(clients).await;
    let groups = library::group_by_period(&songs, &query);

    if groups.is_empty() {
        info!("No liked songs in the selected years.");
        return;
    }

    println!("{}", Table::new(utils::group_table_rows(&groups)));
    info!("{} groups from {} liked songs", groups.len(), songs.len());

    if show_tracks {
        for (key, ids) in &groups {
            println!("{}:\n  {}", key, ids.join("\n  "));
        }
    }
}
