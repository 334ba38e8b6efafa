//! Read-side storage trait

use crate::error::Result;
use crate::types::{Genre, PlaylistDetails, TrackDetails};
use async_trait::async_trait;

/// Read access to the music library
///
/// Every operation is a pure function of the current store contents. The
/// enriched listings attach related rows in memory, so callers get nested
/// documents without issuing further queries.
#[async_trait]
pub trait LibraryReader: Send + Sync {
    /// All genres, in store order
    async fn get_all_genres(&self) -> Result<Vec<Genre>>;

    /// All tracks with artist, album and genres attached
    async fn get_all_tracks(&self) -> Result<Vec<TrackDetails>>;

    /// All playlists with their tracks enriched as in [`Self::get_all_tracks`]
    async fn get_all_playlists(&self) -> Result<Vec<PlaylistDetails>>;
}
