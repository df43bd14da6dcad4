use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::Mutex;

use crate::{
    api,
    config::Config,
    detect::LanguageDetector,
    error::{Error, Result},
    info,
    spotify::ClientProvider,
    types::PkceToken,
};

/// Shared state of the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub clients: Arc<dyn ClientProvider>,
    pub detector: Arc<dyn LanguageDetector>,
    pub pkce: Arc<Mutex<Option<PkceToken>>>,
}

impl AppState {
    pub fn new(
        config: Config,
        clients: Arc<dyn ClientProvider>,
        detector: Arc<dyn LanguageDetector>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            clients,
            detector,
            pkce: Arc::new(Mutex::new(None)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(api::health))
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/get_token", get(api::get_token))
        .route("/fetch_and_group", get(api::fetch_and_group))
        .route(
            "/create_playlist_for_group",
            post(api::create_playlist_for_group),
        )
        .route("/group_by_language", get(api::group_by_language))
        .route(
            "/create_playlist_by_language",
            post(api::create_playlist_by_language),
        )
        .route("/search_artists", get(api::search_artists))
        .with_state(state)
}

pub async fn start_api_server(state: AppState) -> Result<()> {
    let addr = SocketAddr::from_str(&state.config.server_address).map_err(|e| {
        Error::Configuration(format!("Failed to parse server address: {}", e))
    })?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
