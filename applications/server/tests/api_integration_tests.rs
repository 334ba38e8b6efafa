/// API integration tests
/// Tests complete HTTP request/response cycles with a real database
mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use common::TestApp;
use groove_core::storage::LibraryReader;
use serde_json::{json, Value};
use std::collections::HashSet;
use tower::util::ServiceExt;

/// Send a GET and return the status and parsed JSON body
async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}

fn find_track<'a>(tracks: &'a [Value], title: &str) -> &'a Value {
    tracks
        .iter()
        .find(|t| t["title"] == title)
        .unwrap_or_else(|| panic!("track {} not listed", title))
}

/// Test GET /api/health
#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let (status, body) = get_json(app.router(), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

/// Test listings on an empty library
#[tokio::test]
async fn test_empty_library_returns_empty_arrays() {
    let app = TestApp::new().await;

    for uri in ["/api/genres", "/api/tracks", "/api/playlists"] {
        let (status, body) = get_json(app.router(), uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, json!([]), "{}", uri);
    }
}

/// Test GET /api/genres after seeding
#[tokio::test]
async fn test_seeded_genres_are_nine_unique_names() {
    let app = TestApp::seeded().await;

    let (status, body) = get_json(app.router(), "/api/genres").await;
    assert_eq!(status, StatusCode::OK);

    let genres = body.as_array().unwrap();
    assert_eq!(genres.len(), 9);

    let names: HashSet<&str> = genres.iter().map(|g| g["name"].as_str().unwrap()).collect();
    assert_eq!(names.len(), 9);
    assert!(names.contains("R&B"));

    for genre in genres {
        assert!(genre["id"].is_i64());
    }
}

/// Test GET /api/tracks returns enriched records
#[tokio::test]
async fn test_tracks_include_artist_album_and_genres() {
    let app = TestApp::seeded().await;

    let (status, body) = get_json(app.router(), "/api/tracks").await;
    assert_eq!(status, StatusCode::OK);

    let tracks = body.as_array().unwrap();
    assert_eq!(tracks.len(), 25);

    let track = find_track(tracks, "Virtual Insanity");
    assert_eq!(track["artist"]["name"], "NAUTILUS");
    assert_eq!(track["album"]["name"], "Virtual Insanity");
    assert_eq!(track["album"]["artistId"], track["artist"]["id"]);
    assert_eq!(track["audioSrc"], "/audio/nautilus-virtual-insanity.flac");
    assert_eq!(track["coverArt"], "/images/virtual-insanity.jpg");

    let genres: HashSet<&str> = track["genres"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(genres, HashSet::from(["Jazz", "Electronic"]));
}

/// Test the wire shape of a track record
#[tokio::test]
async fn test_track_fields_are_camel_case() {
    let app = TestApp::seeded().await;

    let (_, body) = get_json(app.router(), "/api/tracks").await;
    let track = find_track(body.as_array().unwrap(), "MUTT");

    let mut keys: Vec<&str> = track.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "album",
            "albumId",
            "artist",
            "artistId",
            "audioSrc",
            "coverArt",
            "duration",
            "genres",
            "id",
            "title"
        ]
    );

    let duration = track["duration"].as_i64().unwrap();
    assert!((180..=300).contains(&duration));
}

/// Test that listings agree with the store
#[tokio::test]
async fn test_tracks_match_storage() {
    let app = TestApp::seeded().await;

    let (_, body) = get_json(app.router(), "/api/tracks").await;
    let expected = serde_json::to_value(app.db().get_all_tracks().await.unwrap()).unwrap();

    assert_eq!(body, expected);
}

/// Test GET /api/playlists after seeding
#[tokio::test]
async fn test_single_all_tracks_playlist() {
    let app = TestApp::seeded().await;

    let (status, body) = get_json(app.router(), "/api/playlists").await;
    assert_eq!(status, StatusCode::OK);

    let playlists = body.as_array().unwrap();
    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0]["name"], "All Tracks");

    let (_, tracks) = get_json(app.router(), "/api/tracks").await;
    let playlist_tracks = playlists[0]["tracks"].as_array().unwrap();
    assert_eq!(playlist_tracks.len(), tracks.as_array().unwrap().len());

    // Items were added in track insertion order
    assert_eq!(playlists[0]["tracks"], tracks);
    assert!(playlist_tracks[0].get("playlistId").is_none());
}

/// Test a track with no artist or album
#[tokio::test]
async fn test_track_without_relations_serializes_null() {
    let app = TestApp::new().await;
    insert_orphan_track(&app).await;

    let (status, body) = get_json(app.router(), "/api/tracks").await;

    assert_eq!(status, StatusCode::OK);
    let track = &body[0];
    assert_eq!(track["title"], "Orphan");
    assert!(track["artist"].is_null());
    assert!(track["album"].is_null());
    assert!(track["albumId"].is_null());
    assert!(track["coverArt"].is_null());
    assert_eq!(track["genres"], json!([]));
}

async fn insert_orphan_track(app: &TestApp) {
    let mut conn = app.db().pool().acquire().await.unwrap();
    groove_storage::tracks::create_many(
        &mut *conn,
        &[groove_core::types::CreateTrack {
            title: "Orphan".to_string(),
            album_id: None,
            artist_id: None,
            duration: 200,
            audio_src: "/audio/orphan.flac".to_string(),
            cover_art: None,
        }],
    )
    .await
    .unwrap();
}

/// Test that a store failure maps to 500 with a generic body
#[tokio::test]
async fn test_store_failure_returns_500() {
    let app = TestApp::seeded().await;
    app.db().pool().close().await;

    for uri in ["/api/genres", "/api/tracks", "/api/playlists"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "error": "Database error" }));
    }

    let (status, body) = get_json(app.router(), "/api/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unavailable");
}

/// Test that only GET is routed
#[tokio::test]
async fn test_post_is_not_allowed() {
    let app = TestApp::seeded().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/tracks")
        .body(Body::empty())
        .unwrap();
    let response = app.router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

/// Test an unknown route
#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::new().await;

    let request = Request::builder()
        .uri("/api/artists")
        .body(Body::empty())
        .unwrap();
    let response = app.router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
