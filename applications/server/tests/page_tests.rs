/// End-to-end page load: a real listener serving the router, read back
/// through the HTTP client
mod common;

use common::TestApp;
use groove_client::{ClientError, GrooveClient};
use groove_core::storage::LibraryReader;
use groove_server::export;

/// Serve the app on an ephemeral port and return its base URL
async fn spawn_server(app: &TestApp) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app.router();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_load_page_over_http() {
    let app = TestApp::seeded().await;
    let base_url = spawn_server(&app).await;

    let client = GrooveClient::new(&base_url).unwrap();
    let page = client.load_page().await.unwrap();

    assert_eq!(page.tracks.len(), 25);
    assert_eq!(page.genres.len(), 9);
    assert_eq!(page.playlists.len(), 1);
    assert_eq!(page.playlists[0].tracks, page.tracks);

    let direct = export::load_page(app.db()).await.unwrap();
    assert_eq!(page, direct);
}

#[tokio::test]
async fn test_individual_listings_over_http() {
    let app = TestApp::seeded().await;
    let base_url = spawn_server(&app).await;
    let client = GrooveClient::new(&base_url).unwrap();

    assert_eq!(
        client.genres().await.unwrap(),
        app.db().get_all_genres().await.unwrap()
    );
    assert_eq!(
        client.tracks().await.unwrap(),
        app.db().get_all_tracks().await.unwrap()
    );
    assert_eq!(
        client.playlists().await.unwrap(),
        app.db().get_all_playlists().await.unwrap()
    );
}

#[tokio::test]
async fn test_page_load_fails_when_the_store_fails() {
    let app = TestApp::seeded().await;
    let base_url = spawn_server(&app).await;
    app.db().pool().close().await;

    let client = GrooveClient::new(&base_url).unwrap();
    match client.load_page().await {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("Database error"));
        }
        other => panic!("Expected ServerError, got: {:?}", other),
    }
}
