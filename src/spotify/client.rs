use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tokio::time::sleep;

use crate::{
    config::Config,
    error::{Error, Result},
    management::TokenManager,
    spotify::{ClientProvider, SpotifyApi},
    types::{
        AddItemsRequest, CreatedPlaylist, CurrentUser, NewPlaylist, SavedTracksPage,
        SearchArtist, SearchResponse,
    },
    utils, warning,
};

const MAX_RETRIES: u32 = 3;
const BAD_GATEWAY_DELAY: Duration = Duration::from_secs(10);
const MAX_RETRY_AFTER_SECS: u64 = 120;

/// `reqwest` implementation of [`SpotifyApi`] bound to one access token.
pub struct WebApiClient {
    http: Client,
    api_url: String,
    access_token: String,
}

impl WebApiClient {
    pub fn new(api_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Sends the request built by `build`, retrying on 502 and on 429 with a
    /// sane `Retry-After`. Any other non-success status becomes an error.
    async fn send<F>(&self, build: F) -> Result<Response>
    where
        F: Fn(&Client) -> RequestBuilder + Send + Sync,
    {
        let mut attempt = 0;

        loop {
            let response = build(&self.http)
                .bearer_auth(&self.access_token)
                .send()
                .await?;

            let status = response.status();
            if attempt < MAX_RETRIES {
                if status == StatusCode::BAD_GATEWAY {
                    attempt += 1;
                    sleep(BAD_GATEWAY_DELAY).await;
                    continue; // retry
                }

                if status == StatusCode::TOO_MANY_REQUESTS {
                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .unwrap_or(1);

                    if retry_after <= MAX_RETRY_AFTER_SECS {
                        attempt += 1;
                        sleep(Duration::from_secs(retry_after)).await;
                        continue; // retry
                    }

                    warning!(
                        "Retry after has reached an abnormal high of {} seconds.",
                        retry_after
                    );
                }
            }

            return match response.error_for_status() {
                Ok(valid_response) => Ok(valid_response),
                Err(err) => Err(Error::Upstream(err.to_string())),
            };
        }
    }
}

#[async_trait]
impl SpotifyApi for WebApiClient {
    async fn current_user_saved_tracks(&self, limit: u32, offset: u32) -> Result<SavedTracksPage> {
        let url = self.url("/me/tracks");
        let response = self
            .send(|http| http.get(&url).query(&[("limit", limit), ("offset", offset)]))
            .await?;

        Ok(response.json::<SavedTracksPage>().await?)
    }

    async fn current_user(&self) -> Result<CurrentUser> {
        let url = self.url("/me");
        let response = self.send(|http| http.get(&url)).await?;

        Ok(response.json::<CurrentUser>().await?)
    }

    async fn user_playlist_create(
        &self,
        user_id: &str,
        playlist: &NewPlaylist,
    ) -> Result<CreatedPlaylist> {
        let url = self.url(&format!("/users/{}/playlists", user_id));
        let response = self.send(|http| http.post(&url).json(playlist)).await?;

        Ok(response.json::<CreatedPlaylist>().await?)
    }

    async fn playlist_add_items(&self, playlist_id: &str, track_ids: &[String]) -> Result<()> {
        let url = self.url(&format!("/playlists/{}/tracks", playlist_id));
        let body = AddItemsRequest {
            uris: track_ids.iter().map(|id| utils::track_uri(id)).collect(),
        };

        self.send(|http| http.post(&url).json(&body)).await?;
        Ok(())
    }

    async fn search_artists(&self, query: &str, limit: u32) -> Result<Vec<SearchArtist>> {
        let url = self.url("/search");
        let limit = limit.to_string();
        let response = self
            .send(|http| {
                http.get(&url)
                    .query(&[("q", query), ("type", "artist"), ("limit", limit.as_str())])
            })
            .await?;

        let json = response.json::<SearchResponse>().await?;
        Ok(json.artists.map(|a| a.items).unwrap_or_default())
    }
}

/// Builds a [`WebApiClient`] from the on-disk token cache, refreshing the
/// token first when it is about to expire.
pub struct CachedTokenProvider {
    config: Config,
}

impl CachedTokenProvider {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ClientProvider for CachedTokenProvider {
    async fn client(&self) -> Result<Arc<dyn SpotifyApi>> {
        let mut token_mgr = TokenManager::load(self.config.clone()).await.map_err(|_| {
            Error::Unauthorized("No Spotify token found. Go to /login first.".to_string())
        })?;

        let token = token_mgr.get_valid_token().await;
        Ok(Arc::new(WebApiClient::new(&self.config.api_url, token)))
    }
}
