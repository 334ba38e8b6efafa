//! Aggregated page document

use super::{Genre, PlaylistDetails, TrackDetails};
use serde::{Deserialize, Serialize};

/// Everything the library page renders, merged from the three listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageData {
    pub tracks: Vec<TrackDetails>,
    pub playlists: Vec<PlaylistDetails>,
    pub genres: Vec<Genre>,
}

impl PageData {
    pub fn new(
        tracks: Vec<TrackDetails>,
        playlists: Vec<PlaylistDetails>,
        genres: Vec<Genre>,
    ) -> Self {
        Self {
            tracks,
            playlists,
            genres,
        }
    }
}
