use groove_core::{error::Result, types::*};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqliteExecutor};

pub async fn get_all<'e, E: SqliteExecutor<'e>>(executor: E) -> Result<Vec<Album>> {
    let albums =
        sqlx::query_as::<_, Album>("SELECT id, name, artist_id FROM albums ORDER BY id")
            .fetch_all(executor)
            .await?;

    Ok(albums)
}

/// Insert albums in one statement, returned in insertion order
pub async fn create_many(
    conn: &mut SqliteConnection,
    albums: &[CreateAlbum],
) -> Result<Vec<Album>> {
    if albums.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Sqlite>::new("INSERT INTO albums (name, artist_id) ");
    builder.push_values(albums, |mut row, album| {
        row.push_bind(album.name.as_str()).push_bind(album.artist_id);
    });
    builder.push(" RETURNING id, name, artist_id");

    let mut created: Vec<Album> = builder.build_query_as().fetch_all(&mut *conn).await?;
    created.sort_by_key(|a| a.id);

    Ok(created)
}
