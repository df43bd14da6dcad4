//! Configuration management for spotime.
//!
//! Values are read from environment variables. Before reading them, `.env`
//! files are loaded (without overriding variables that are already set) from
//! two places, in order:
//! 1. `<data_local_dir>/spotime/.env`
//! 2. `./.env` in the working directory
//!
//! The resulting [`Config`] is built once at startup and handed to whatever
//! needs it; nothing reads the environment after that.

use std::{env, path::PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_SCOPE: &str = "user-library-read playlist-modify-private";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub client_id: String,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub server_address: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] listing every required variable that
    /// is missing or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut required = |key: &'static str| match value(key) {
            Some(v) => v,
            None => {
                missing.push(key);
                String::new()
            }
        };

        let client_id = required("SPOTIFY_API_AUTH_CLIENT_ID");
        let redirect_uri = required("SPOTIFY_API_REDIRECT_URI");

        if !missing.is_empty() {
            return Err(Error::Configuration(format!(
                "missing environment variables: {}",
                missing.join(", ")
            )));
        }

        let optional =
            |key: &str, default: &str| value(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            client_id,
            redirect_uri,
            scope: optional("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
            auth_url: optional("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: optional("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL),
            server_address: optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
        })
    }
}

/// Loads `.env` files from the local data directory and the working directory.
///
/// Creates `<data_local_dir>/spotime` when missing so users have a place to
/// drop their `.env`. Missing files are skipped.
///
/// # Errors
///
/// Fails when the directory cannot be created or an existing `.env` file
/// cannot be parsed.
pub async fn load_env() -> Result<()> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    for candidate in [path, PathBuf::from(".env")] {
        if candidate.is_file() {
            dotenv::from_path(&candidate).map_err(|e| {
                Error::Configuration(format!("cannot read {}: {}", candidate.display(), e))
            })?;
        }
    }

    Ok(())
}

/// `<data_local_dir>/spotime`, falling back to `./spotime`.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotime");
    path
}
