/// Tracks API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use groove_core::{storage::LibraryReader, types::TrackDetails};

/// GET /api/tracks
///
/// Every track with its artist, album and genres attached. Artist or album
/// may be `null`.
pub async fn list_tracks(State(app_state): State<AppState>) -> Result<Json<Vec<TrackDetails>>> {
    let tracks = app_state.db.get_all_tracks().await?;
    tracing::debug!(count = tracks.len(), "Listing tracks");
    Ok(Json(tracks))
}
