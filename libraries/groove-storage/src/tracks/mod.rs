use crate::{albums, artists, genres};
use groove_core::{error::Result, types::*, GrooveError};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqliteExecutor, SqlitePool};
use std::collections::HashMap;

pub async fn get_all<'e, E: SqliteExecutor<'e>>(executor: E) -> Result<Vec<Track>> {
    let tracks = sqlx::query_as::<_, Track>(
        "SELECT id, title, album_id, artist_id, duration, audio_src, cover_art
         FROM tracks
         ORDER BY id",
    )
    .fetch_all(executor)
    .await?;

    Ok(tracks)
}

/// Get all tracks with artist, album and genres attached
///
/// Runs one query per table and joins in memory. The reads share one
/// transaction, so the listing reflects a single snapshot of the store. A
/// track without an artist or album keeps `None` there; a foreign key
/// pointing at a row that does not exist is an error.
pub async fn get_all_details(pool: &SqlitePool) -> Result<Vec<TrackDetails>> {
    let mut tx = pool.begin().await?;
    let details = load_details(&mut *tx).await?;
    tx.commit().await?;

    Ok(details)
}

/// Enriched tracks read through `conn`
pub(crate) async fn load_details(conn: &mut SqliteConnection) -> Result<Vec<TrackDetails>> {
    let tracks = get_all(&mut *conn).await?;

    let artists: HashMap<ArtistId, Artist> = artists::get_all(&mut *conn)
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();
    let albums: HashMap<AlbumId, Album> = albums::get_all(&mut *conn)
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();
    let genres_by_id: HashMap<GenreId, Genre> = genres::get_all(&mut *conn)
        .await?
        .into_iter()
        .map(|g| (g.id, g))
        .collect();

    let mut genres_by_track: HashMap<TrackId, Vec<Genre>> = HashMap::new();
    for link in genres::get_track_links(&mut *conn).await? {
        let genre = genres_by_id
            .get(&link.genre_id)
            .cloned()
            .ok_or_else(|| GrooveError::not_found("Genre", link.genre_id))?;
        genres_by_track.entry(link.track_id).or_default().push(genre);
    }

    tracks
        .into_iter()
        .map(|track| {
            let artist = lookup(&artists, track.artist_id, "Artist")?;
            let album = lookup(&albums, track.album_id, "Album")?;
            let genres = genres_by_track.remove(&track.id).unwrap_or_default();
            Ok(TrackDetails::new(track, artist, album, genres))
        })
        .collect()
}

fn lookup<T: Clone>(rows: &HashMap<i64, T>, id: Option<i64>, entity: &str) -> Result<Option<T>> {
    match id {
        None => Ok(None),
        Some(id) => rows
            .get(&id)
            .cloned()
            .map(Some)
            .ok_or_else(|| GrooveError::not_found(entity, id)),
    }
}

/// Insert tracks in one statement, returned in insertion order
pub async fn create_many(
    conn: &mut SqliteConnection,
    tracks: &[CreateTrack],
) -> Result<Vec<Track>> {
    if tracks.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Sqlite>::new(
        "INSERT INTO tracks (title, album_id, artist_id, duration, audio_src, cover_art) ",
    );
    builder.push_values(tracks, |mut row, track| {
        row.push_bind(track.title.as_str())
            .push_bind(track.album_id)
            .push_bind(track.artist_id)
            .push_bind(track.duration)
            .push_bind(track.audio_src.as_str())
            .push_bind(track.cover_art.as_deref());
    });
    builder.push(" RETURNING id, title, album_id, artist_id, duration, audio_src, cover_art");

    let mut created: Vec<Track> = builder.build_query_as().fetch_all(&mut *conn).await?;
    created.sort_by_key(|t| t.id);

    Ok(created)
}
