//! Playlist types

use super::{TrackDetails, TrackId};
use serde::{Deserialize, Serialize};

pub type PlaylistId = i64;
pub type PlaylistItemId = i64;

/// A playlist row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
}

/// A track entry in a playlist; ordering is the item id (insertion order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub id: PlaylistItemId,
    pub playlist_id: PlaylistId,
    pub track_id: TrackId,
}

/// A playlist with its tracks resolved, in item order
///
/// The item rows themselves are not part of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDetails {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub tracks: Vec<TrackDetails>,
}

impl PlaylistDetails {
    pub fn new(playlist: Playlist, tracks: Vec<TrackDetails>) -> Self {
        Self { playlist, tracks }
    }

    pub fn name(&self) -> &str {
        &self.playlist.name
    }
}
