use crate::{genres, playlists, tracks};
use async_trait::async_trait;
use groove_core::{error::Result, storage::LibraryReader, types::*};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`
#[derive(Clone)]
pub struct LocalStorageContext {
    pool: SqlitePool,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl LibraryReader for LocalStorageContext {
    async fn get_all_genres(&self) -> Result<Vec<Genre>> {
        genres::get_all(&self.pool).await
    }

    async fn get_all_tracks(&self) -> Result<Vec<TrackDetails>> {
        tracks::get_all_details(&self.pool).await
    }

    async fn get_all_playlists(&self) -> Result<Vec<PlaylistDetails>> {
        playlists::get_all_details(&self.pool).await
    }
}
