//! Track types

use super::{Album, AlbumId, Artist, ArtistId, Genre};
use serde::{Deserialize, Serialize};

pub type TrackId = i64;

/// A track row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub album_id: Option<AlbumId>,
    pub artist_id: Option<ArtistId>,
    /// Length in seconds
    pub duration: i64,
    /// Path of the audio resource, not validated here
    pub audio_src: String,
    pub cover_art: Option<String>,
}

/// Data for creating a new track
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrack {
    pub title: String,
    pub album_id: Option<AlbumId>,
    pub artist_id: Option<ArtistId>,
    pub duration: i64,
    pub audio_src: String,
    pub cover_art: Option<String>,
}

/// A track with its artist, album and genres attached
///
/// Serializes flat: every track column sits next to the nested `artist`,
/// `album` and `genres` fields. Missing relations serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDetails {
    #[serde(flatten)]
    pub track: Track,
    pub artist: Option<Artist>,
    pub album: Option<Album>,
    pub genres: Vec<Genre>,
}

impl TrackDetails {
    pub fn new(
        track: Track,
        artist: Option<Artist>,
        album: Option<Album>,
        genres: Vec<Genre>,
    ) -> Self {
        Self {
            track,
            artist,
            album,
            genres,
        }
    }

    pub fn id(&self) -> TrackId {
        self.track.id
    }

    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_ref().map(|a| a.name.as_str())
    }

    pub fn album_name(&self) -> Option<&str> {
        self.album.as_ref().map(|a| a.name.as_str())
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }
}
