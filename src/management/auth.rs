use std::path::PathBuf;

use chrono::Utc;

use crate::{
    config::{self, Config},
    error::Result,
    spotify,
    types::Token,
};

/// Seconds before the real expiry at which a token is treated as expired.
const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct TokenManager {
    token: Token,
    config: Config,
}

impl TokenManager {
    pub fn new(token: Token, config: Config) -> Self {
        TokenManager { token, config }
    }

    pub async fn load(config: Config) -> Result<Self> {
        let content = async_fs::read_to_string(Self::token_path()).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token, config })
    }

    /// Reads the cached token without a configuration, for display only.
    pub async fn cached_token() -> Result<Token> {
        let content = async_fs::read_to_string(Self::token_path()).await?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn persist(&self) -> Result<()> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Returns an access token, refreshing and persisting it first if it is
    /// expired. A failed refresh falls back to the current token and lets the
    /// API reject it.
    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            if let Ok(new_token) =
                spotify::auth::refresh_token(&self.config, &self.token.refresh_token).await
            {
                self.token = merge_refreshed(&self.token, new_token);
                let _ = self.persist().await;
            }
        }

        self.token.access_token.clone()
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }

    fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }
}

/// Spotify may omit the refresh token on refresh; keep the old one then.
fn merge_refreshed(old: &Token, mut new: Token) -> Token {
    if new.refresh_token.is_empty() {
        new.refresh_token = old.refresh_token.clone();
    }
    if new.scope.is_empty() {
        new.scope = old.scope.clone();
    }
    new
}
