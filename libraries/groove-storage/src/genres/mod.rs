use groove_core::{error::Result, types::*};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqliteExecutor, SqlitePool};

pub async fn get_all<'e, E: SqliteExecutor<'e>>(executor: E) -> Result<Vec<Genre>> {
    let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY id")
        .fetch_all(executor)
        .await?;

    Ok(genres)
}

/// Get all genres for a specific track, in the order they were attached
pub async fn get_by_track(pool: &SqlitePool, track_id: TrackId) -> Result<Vec<Genre>> {
    let genres = sqlx::query_as::<_, Genre>(
        "SELECT g.id, g.name
         FROM genres g
         INNER JOIN track_genres tg ON g.id = tg.genre_id
         WHERE tg.track_id = ?
         ORDER BY tg.rowid",
    )
    .bind(track_id)
    .fetch_all(pool)
    .await?;

    Ok(genres)
}

/// Insert genres in one statement, returned in insertion order
pub async fn create_many(conn: &mut SqliteConnection, names: &[&str]) -> Result<Vec<Genre>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Sqlite>::new("INSERT INTO genres (name) ");
    builder.push_values(names, |mut row, name| {
        row.push_bind(*name);
    });
    builder.push(" RETURNING id, name");

    let mut genres: Vec<Genre> = builder.build_query_as().fetch_all(&mut *conn).await?;
    genres.sort_by_key(|g| g.id);

    Ok(genres)
}

/// Every track/genre link, in insertion order
pub async fn get_track_links<'e, E: SqliteExecutor<'e>>(executor: E) -> Result<Vec<TrackGenre>> {
    let links = sqlx::query_as::<_, TrackGenre>(
        "SELECT track_id, genre_id FROM track_genres ORDER BY rowid",
    )
    .fetch_all(executor)
    .await?;

    Ok(links)
}

/// Attach genres to tracks
///
/// A pair that is already linked violates the composite key and fails the
/// whole statement.
pub async fn link_tracks(conn: &mut SqliteConnection, links: &[TrackGenre]) -> Result<u64> {
    if links.is_empty() {
        return Ok(0);
    }

    let mut builder = QueryBuilder::<Sqlite>::new("INSERT INTO track_genres (track_id, genre_id) ");
    builder.push_values(links, |mut row, link| {
        row.push_bind(link.track_id).push_bind(link.genre_id);
    });

    let result = builder.build().execute(&mut *conn).await?;

    Ok(result.rows_affected())
}
