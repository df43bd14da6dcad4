use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
    response::{Html, Redirect},
};
use serde_json::{Value, json};

use crate::{
    error::Result,
    management::TokenManager,
    server::AppState,
    spotify,
    types::PkceToken,
    utils, warning,
};

pub async fn login(State(state): State<AppState>) -> Result<Redirect> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let auth_url = spotify::auth::authorize_url(&state.config, &code_challenge)?;

    let mut lock = state.pkce.lock().await;
    *lock = Some(PkceToken {
        code_verifier,
        token: None,
    });

    Ok(Redirect::to(&auth_url))
}

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>No code provided in callback.</h4>");
    };

    let mut pkce = state.pkce.lock().await;
    // Take code verifier from state
    let Some(pkce_state) = pkce.as_mut() else {
        return Html("<h4>Missing PKCE code verifier.</h4>");
    };

    let token =
        match spotify::auth::exchange_code_pkce(&state.config, code, &pkce_state.code_verifier)
            .await
        {
            Ok(token) => token,
            Err(e) => {
                warning!("Token exchange failed: {}", e);
                return Html("<h4>Login failed.</h4>");
            }
        };

    let token_mgr = TokenManager::new(token.clone(), (*state.config).clone());
    if let Err(e) = token_mgr.persist().await {
        warning!("Failed to save token to cache: {}", e);
        return Html("<h4>Login succeeded but the token could not be saved.</h4>");
    }

    pkce_state.token = Some(token);
    Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
}

pub async fn get_token() -> Json<Value> {
    match TokenManager::cached_token().await {
        Ok(token) => Json(json!(token)),
        Err(_) => Json(json!({ "error": "No cached token" })),
    }
}
