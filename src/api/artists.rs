use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    error::{Error, Result},
    library,
    server::AppState,
};

pub const DEFAULT_SEARCH_LIMIT: u32 = 20;
pub const MAX_SEARCH_LIMIT: u32 = 50;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<u32>,
}

pub async fn search_artists(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Value>> {
    let q = query.q.unwrap_or_default();
    if q.is_empty() {
        return Err(Error::InvalidRequest(
            "Query parameter 'q' must not be empty".to_string(),
        ));
    }

    let limit = query.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
        return Err(Error::InvalidRequest(format!(
            "Query parameter 'limit' must be between 1 and {}",
            MAX_SEARCH_LIMIT
        )));
    }

    let api = state.clients.client().await?;
    let artists = library::search_artists(api.as_ref(), &q, limit).await?;

    Ok(Json(json!({
        "query": q,
        "count": artists.len(),
        "artists": artists,
    })))
}
