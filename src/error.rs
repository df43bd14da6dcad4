//! Error taxonomy shared by the core, the Spotify client and the HTTP boundary.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::warning;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The selected group or language key is absent from the grouping.
    #[error("{0}")]
    NotFound(String),

    /// The selection resolved to an empty or too small set of tracks.
    #[error("{0}")]
    InvalidRequest(String),

    /// No usable token in the cache.
    #[error("{0}")]
    Unauthorized(String),

    /// Anything reported by Spotify or the network.
    #[error("Spotify request failed: {0}")]
    Upstream(String),

    /// An append batch failed after the playlist was created.
    #[error(
        "Playlist {playlist_id} is incomplete: {committed} of {total} tracks added before failure: {reason}"
    )]
    PartialPlaylist {
        playlist_id: String,
        committed: usize,
        total: usize,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Upstream(err.to_string())
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::Upstream(_) | Error::PartialPlaylist { .. } => StatusCode::BAD_GATEWAY,
            Error::Configuration(_) | Error::Io(_) | Error::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warning!("Request failed: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
