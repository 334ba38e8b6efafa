/// Playlists API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use groove_core::{storage::LibraryReader, types::PlaylistDetails};

/// GET /api/playlists
pub async fn list_playlists(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<PlaylistDetails>>> {
    let playlists = app_state.db.get_all_playlists().await?;
    Ok(Json(playlists))
}
