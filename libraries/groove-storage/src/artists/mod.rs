use groove_core::{error::Result, types::*};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqliteExecutor};

pub async fn get_all<'e, E: SqliteExecutor<'e>>(executor: E) -> Result<Vec<Artist>> {
    let artists = sqlx::query_as::<_, Artist>("SELECT id, name FROM artists ORDER BY id")
        .fetch_all(executor)
        .await?;

    Ok(artists)
}

/// Insert artists in one statement, returned in insertion order
pub async fn create_many(conn: &mut SqliteConnection, names: &[&str]) -> Result<Vec<Artist>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder = QueryBuilder::<Sqlite>::new("INSERT INTO artists (name) ");
    builder.push_values(names, |mut row, name| {
        row.push_bind(*name);
    });
    builder.push(" RETURNING id, name");

    let mut artists: Vec<Artist> = builder.build_query_as().fetch_all(&mut *conn).await?;
    artists.sort_by_key(|a| a.id);

    Ok(artists)
}
