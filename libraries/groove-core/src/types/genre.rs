//! Genre types

use super::TrackId;
use serde::{Deserialize, Serialize};

pub type GenreId = i64;

/// A music genre
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// Track/genre link row; `(track_id, genre_id)` is unique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct TrackGenre {
    pub track_id: TrackId,
    pub genre_id: GenreId,
}
