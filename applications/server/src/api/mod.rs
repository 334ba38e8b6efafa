/// API route modules
pub mod genres;
pub mod health;
pub mod playlists;
pub mod tracks;

use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes mounted under `/api`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/genres", get(genres::list_genres))
        .route("/tracks", get(tracks::list_tracks))
        .route("/playlists", get(playlists::list_playlists))
}
