use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{
    config::Config,
    error::{Error, Result},
    info,
    server::{AppState, start_api_server},
    types::{PkceToken, Token},
    utils, warning,
};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    scope: Option<String>,
    expires_in: Option<u64>,
}

impl From<TokenResponse> for Token {
    fn from(res: TokenResponse) -> Self {
        Token {
            access_token: res.access_token,
            refresh_token: res.refresh_token.unwrap_or_default(),
            scope: res.scope.unwrap_or_default(),
            expires_in: res.expires_in.unwrap_or(3600),
            obtained_at: Utc::now().timestamp() as u64,
        }
    }
}

/// Runs the interactive OAuth 2.0 PKCE login from the terminal.
///
/// The flow:
/// 1. **PKCE Setup**: generates a code verifier and its S256 challenge and
///    stores the verifier in the shared state
/// 2. **Server Start**: launches the local HTTP server so Spotify can reach
///    the `/callback` route
/// 3. **Browser Launch**: opens the authorize URL, or prints it when no
///    browser can be started
/// 4. **Callback Handling**: the callback route exchanges the code and
///    persists the token to the cache
///
/// # Errors
///
/// Returns [`Error::Unauthorized`] when no token arrives within 60 seconds.
pub async fn auth(state: AppState) -> Result<Token> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let auth_url = authorize_url(&state.config, &code_challenge)?;

    // Store verifier in shared state before redirect
    {
        let mut lock = state.pkce.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            token: None,
        });
    }

    let shared_state = Arc::clone(&state.pkce);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    } else {
        info!("Waiting for Spotify authorization in your browser...");
    }

    wait_for_token(shared_state)
        .await
        .ok_or_else(|| Error::Unauthorized("Authentication failed or timed out.".to_string()))
}

/// Polls the shared state once per second for at most 60 seconds until the
/// callback handler has stored a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|p| p.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Builds the Spotify authorize URL for the PKCE flow.
pub fn authorize_url(config: &Config, code_challenge: &str) -> Result<String> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
            ("scope", config.scope.as_str()),
        ],
    )
    .map_err(|e| Error::Configuration(format!("invalid SPOTIFY_API_AUTH_URL: {}", e)))?;

    Ok(url.to_string())
}

/// Exchanges a refresh token for a new access token.
///
/// Spotify may or may not rotate the refresh token; when the response omits
/// it the returned token carries an empty `refresh_token` and the caller
/// keeps the old one.
pub async fn refresh_token(config: &Config, refresh_token: &str) -> Result<Token> {
    let res = Client::new()
        .post(&config.token_url)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", config.client_id.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    Ok(res.json::<TokenResponse>().await?.into())
}

/// Exchanges the authorization code from the callback for a token. The
/// `verifier` must be the one whose challenge was sent to the authorize URL.
pub async fn exchange_code_pkce(config: &Config, code: &str, verifier: &str) -> Result<Token> {
    let res = Client::new()
        .post(&config.token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", config.client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    Ok(res.json::<TokenResponse>().await?.into())
}
