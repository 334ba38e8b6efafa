/// Export tests: documents written to disk match what the API serves
mod common;

use common::TestApp;
use groove_core::{storage::LibraryReader, types::PageData};
use groove_server::export::{self, GENRES_FILE, PAGE_FILE, PLAYLISTS_FILE, TRACKS_FILE};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

async fn read_json(dir: &Path, relative: &str) -> Value {
    let bytes = tokio::fs::read(dir.join(relative)).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_export_writes_every_document() {
    let app = TestApp::seeded().await;
    let out = TempDir::new().unwrap();

    let written = export::export_all(app.db(), out.path()).await.unwrap();

    assert_eq!(written.len(), 4);
    for relative in [GENRES_FILE, TRACKS_FILE, PLAYLISTS_FILE, PAGE_FILE] {
        assert!(written.contains(&out.path().join(relative)), "{}", relative);
        assert!(out.path().join(relative).is_file(), "{}", relative);
    }
}

#[tokio::test]
async fn test_exported_listings_match_storage() {
    let app = TestApp::seeded().await;
    let out = TempDir::new().unwrap();
    export::export_all(app.db(), out.path()).await.unwrap();

    let genres = serde_json::to_value(app.db().get_all_genres().await.unwrap()).unwrap();
    let tracks = serde_json::to_value(app.db().get_all_tracks().await.unwrap()).unwrap();
    let playlists = serde_json::to_value(app.db().get_all_playlists().await.unwrap()).unwrap();

    assert_eq!(read_json(out.path(), GENRES_FILE).await, genres);
    assert_eq!(read_json(out.path(), TRACKS_FILE).await, tracks);
    assert_eq!(read_json(out.path(), PLAYLISTS_FILE).await, playlists);
}

#[tokio::test]
async fn test_exported_page_merges_the_listings() {
    let app = TestApp::seeded().await;
    let out = TempDir::new().unwrap();
    export::export_all(app.db(), out.path()).await.unwrap();

    let page: PageData = serde_json::from_value(read_json(out.path(), PAGE_FILE).await).unwrap();

    assert_eq!(page.tracks.len(), 25);
    assert_eq!(page.genres.len(), 9);
    assert_eq!(page.playlists.len(), 1);
    assert_eq!(page, export::load_page(app.db()).await.unwrap());
}

#[tokio::test]
async fn test_export_of_empty_library() {
    let app = TestApp::new().await;
    let out = TempDir::new().unwrap();
    export::export_all(app.db(), out.path()).await.unwrap();

    let page = read_json(out.path(), PAGE_FILE).await;
    assert_eq!(
        page,
        serde_json::json!({ "tracks": [], "playlists": [], "genres": [] })
    );
}

#[tokio::test]
async fn test_export_fails_when_the_store_fails() {
    let app = TestApp::seeded().await;
    app.db().pool().close().await;
    let out = TempDir::new().unwrap();

    assert!(export::export_all(app.db(), out.path()).await.is_err());
    assert!(!out.path().join(PAGE_FILE).exists());
}
