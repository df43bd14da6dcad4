use tabled::Table;

use crate::{
    cli::fetch_library, detect::LanguageDetector, info, library, spotify::ClientProvider, utils,
};

pub async fn languages(clients: &dyn ClientProvider, detector: &dyn LanguageDetector) {
    let (_, songs) = fetch_library(clients).await;
    let groups = library::group_by_language(&songs, detector);
    let grouped: usize = groups.values().map(Vec::len).sum();

    println!("{}", Table::new(utils::group_table_rows(&groups)));
    info!(
        "{} of {} liked songs assigned to {} languages",
        grouped,
        songs.len(),
        groups.len()
    );
}
