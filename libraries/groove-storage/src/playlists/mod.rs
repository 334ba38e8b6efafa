use crate::tracks;
use groove_core::{error::Result, types::*, GrooveError};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqliteExecutor, SqlitePool};
use std::collections::HashMap;

pub async fn get_all<'e, E: SqliteExecutor<'e>>(executor: E) -> Result<Vec<Playlist>> {
    let playlists = sqlx::query_as::<_, Playlist>("SELECT id, name FROM playlists ORDER BY id")
        .fetch_all(executor)
        .await?;

    Ok(playlists)
}

/// Every playlist item, in insertion order
pub async fn get_items<'e, E: SqliteExecutor<'e>>(executor: E) -> Result<Vec<PlaylistItem>> {
    let items = sqlx::query_as::<_, PlaylistItem>(
        "SELECT id, playlist_id, track_id FROM playlist_items ORDER BY id",
    )
    .fetch_all(executor)
    .await?;

    Ok(items)
}

/// Get all playlists with their tracks fully enriched, in item order
///
/// Every read happens inside one transaction.
pub async fn get_all_details(pool: &SqlitePool) -> Result<Vec<PlaylistDetails>> {
    let mut tx = pool.begin().await?;

    let playlists = get_all(&mut *tx).await?;
    let items = get_items(&mut *tx).await?;
    let tracks_by_id: HashMap<TrackId, TrackDetails> = tracks::load_details(&mut *tx)
        .await?
        .into_iter()
        .map(|t| (t.id(), t))
        .collect();

    tx.commit().await?;

    let mut tracks_by_playlist: HashMap<PlaylistId, Vec<TrackDetails>> = HashMap::new();
    for item in items {
        let track = tracks_by_id
            .get(&item.track_id)
            .cloned()
            .ok_or_else(|| GrooveError::not_found("Track", item.track_id))?;
        tracks_by_playlist
            .entry(item.playlist_id)
            .or_default()
            .push(track);
    }

    Ok(playlists
        .into_iter()
        .map(|playlist| {
            let tracks = tracks_by_playlist.remove(&playlist.id).unwrap_or_default();
            PlaylistDetails::new(playlist, tracks)
        })
        .collect())
}

/// Create new playlist
pub async fn create(conn: &mut SqliteConnection, name: &str) -> Result<Playlist> {
    let playlist = sqlx::query_as::<_, Playlist>(
        "INSERT INTO playlists (name) VALUES (?) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await?;

    Ok(playlist)
}

/// Append tracks to a playlist, keeping the given order
pub async fn add_tracks(
    conn: &mut SqliteConnection,
    playlist_id: PlaylistId,
    track_ids: &[TrackId],
) -> Result<Vec<PlaylistItem>> {
    if track_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder =
        QueryBuilder::<Sqlite>::new("INSERT INTO playlist_items (playlist_id, track_id) ");
    builder.push_values(track_ids, |mut row, track_id| {
        row.push_bind(playlist_id).push_bind(*track_id);
    });
    builder.push(" RETURNING id, playlist_id, track_id");

    let mut items: Vec<PlaylistItem> = builder.build_query_as().fetch_all(&mut *conn).await?;
    items.sort_by_key(|i| i.id);

    Ok(items)
}
