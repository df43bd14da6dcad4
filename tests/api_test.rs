mod common;

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use common::{FakeDetector, FakeProvider, FakeSpotify, song};
use serde_json::{Value, json};
use spotime::{
    config::Config,
    server::{AppState, router},
    types::LikedSongItem,
};
use tower::ServiceExt;

fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "SPOTIFY_API_AUTH_CLIENT_ID" => Some("client".to_string()),
        "SPOTIFY_API_REDIRECT_URI" => Some("http://127.0.0.1:8080/callback".to_string()),
        _ => None,
    })
    .unwrap()
}

fn library() -> Vec<LikedSongItem> {
    vec![
        song("n1", "2025-02-01T00:00:00Z", "Volare", &["Domenico Modugno"]),
        song("n2", "2024-11-20T00:00:00Z", "Yesterday", &["The Beatles"]),
        song("n3", "2024-03-02T00:00:00Z", "Azzurro", &["Adriano Celentano"]),
        song("n4", "2024-01-15T00:00:00Z", "Caruso", &["Lucio Dalla"]),
        song("n5", "2023-07-07T00:00:00Z", "Mmmh", &["?"]),
    ]
}

fn detector() -> FakeDetector {
    FakeDetector::new(&[
        ("Volare - Domenico Modugno", "it"),
        ("Yesterday - The Beatles", "en"),
        ("Azzurro - Adriano Celentano", "it"),
        ("Caruso - Lucio Dalla", "it"),
    ])
}

fn app_with(api: Arc<FakeSpotify>) -> Router {
    let provider = FakeProvider {
        api: Some(api),
    };
    router(AppState::new(
        test_config(),
        Arc::new(provider),
        Arc::new(detector()),
    ))
}

fn app() -> (Router, Arc<FakeSpotify>) {
    let api = Arc::new(FakeSpotify::with_library(library(), 50));
    (app_with(Arc::clone(&api)), api)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_ping() {
    let (app, _) = app();

    let (status, body) = send(app, get("/ping")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_fetch_and_group_yearly() {
    let (app, _) = app();

    let (status, body) = send(app, get("/fetch_and_group?period=yearly&start_year=2024")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_songs"], 5);
    assert_eq!(
        body["groups"],
        json!({
            "2024": ["n4", "n3", "n2"],
            "2025": ["n1"],
        })
    );
}

#[tokio::test]
async fn test_fetch_and_group_rejects_unknown_period() {
    let (app, _) = app();

    let (status, body) = send(app, get("/fetch_and_group?period=weekly")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_playlist_rejects_unknown_period() {
    let (app, api) = app();

    let (status, body) = send(
        app,
        post(
            "/create_playlist_for_group",
            json!({ "period": "weekly", "group_key": "2024" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(api.created_playlists().is_empty());
}

#[tokio::test]
async fn test_create_playlist_rejects_unknown_order() {
    let (app, _) = app();

    let (status, body) = send(
        app,
        post(
            "/create_playlist_for_group",
            json!({ "period": "yearly", "order": "random", "group_key": "2024" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_playlist_requires_group_key() {
    let (app, _) = app();

    let (status, body) = send(app, post("/create_playlist_for_group", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_playlist_for_missing_group() {
    let (app, api) = app();

    let (status, body) = send(
        app,
        post("/create_playlist_for_group", json!({ "group_key": "2019(01)" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Group '2019(01)' not found.");
    assert!(api.created_playlists().is_empty());
}

#[tokio::test]
async fn test_create_playlist_for_group() {
    let (app, api) = app();

    let (status, body) = send(
        app,
        post(
            "/create_playlist_for_group",
            json!({
                "period": "yearly",
                "group_key": "2024",
                "order": "desc",
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Playlist created");
    assert_eq!(body["playlist_name"], "Liked Songs - 2024");
    assert_eq!(body["group_key"], "2024");
    assert_eq!(body["track_count"], 3);
    assert_eq!(body["playlist_url"], "https://open.spotify.com/playlist/pl1");
    assert_eq!(api.added_batches(), vec![vec!["n2", "n3", "n4"]]);
}

#[tokio::test]
async fn test_group_by_language() {
    let (app, _) = app();

    let (status, body) = send(app, get("/group_by_language")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["groups"],
        json!({
            "en": ["n2"],
            "it": ["n1", "n3", "n4"],
        })
    );
}

#[tokio::test]
async fn test_language_playlist_needs_min_songs() {
    let (app, api) = app();

    let (status, _) = send(
        app,
        post("/create_playlist_by_language", json!({ "language_code": "it" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(api.created_playlists().is_empty());
}

#[tokio::test]
async fn test_language_playlist_created() {
    let (app, api) = app();

    let (status, body) = send(
        app,
        post(
            "/create_playlist_by_language",
            json!({ "language_code": "it", "min_songs": 3, "playlist_name": "Italiane" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "it");
    assert_eq!(body["playlist_name"], "Italiane");
    assert_eq!(body["track_count"], 3);
    assert_eq!(api.created_playlists()[0].1.description, "Liked songs detected as IT");
}

#[tokio::test]
async fn test_language_playlist_requires_language_code() {
    let (app, api) = app();

    let (status, body) = send(
        app,
        post("/create_playlist_by_language", json!({ "min_songs": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert!(api.created_playlists().is_empty());
}

#[tokio::test]
async fn test_search_artists_validation() {
    let (app, api) = app();

    let (status, _) = send(app.clone(), get("/search_artists?q=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app.clone(), get("/search_artists?q=mina&limit=51")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app.clone(), get("/search_artists?q=mina&limit=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(app, get("/search_artists?q=mina")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["query"], "mina");
    assert_eq!(body["count"], 0);

    assert_eq!(
        *api.searches.lock().unwrap(),
        vec![("mina".to_string(), 20)]
    );
}

#[tokio::test]
async fn test_requests_without_token_are_unauthorized() {
    let app = router(AppState::new(
        test_config(),
        Arc::new(FakeProvider::unauthorized()),
        Arc::new(detector()),
    ));

    let (status, body) = send(app, get("/fetch_and_group")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().contains("token"));
}

#[tokio::test]
async fn test_upstream_failure_maps_to_bad_gateway() {
    let api = Arc::new(FakeSpotify {
        fail_page: Some(0),
        ..Default::default()
    });

    let (status, _) = send(app_with(api), get("/group_by_language")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
