//! Declared table graph
//!
//! Every table lists the tables its foreign keys point at. Insert and clear
//! orders are computed from this graph instead of being written out by hand,
//! so adding a table only means declaring it here (and in a migration).

use crate::error::StorageError;
use groove_core::Result;
use sqlx::{SqliteConnection, SqlitePool};

/// A table and the tables it references
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub references: &'static [&'static str],
}

impl TableDef {
    pub const fn new(name: &'static str, references: &'static [&'static str]) -> Self {
        Self { name, references }
    }
}

/// The library schema, in declaration order
pub const TABLES: &[TableDef] = &[
    TableDef::new("artists", &[]),
    TableDef::new("albums", &["artists"]),
    TableDef::new("genres", &[]),
    TableDef::new("tracks", &["albums", "artists"]),
    TableDef::new("track_genres", &["tracks", "genres"]),
    TableDef::new("playlists", &[]),
    TableDef::new("playlist_items", &["playlists", "tracks"]),
];

/// Order tables so every table comes after the tables it references.
///
/// Among the tables that are ready at each step the earliest declared one
/// wins, which keeps the result stable.
pub fn topological_order(
    tables: &[TableDef],
) -> std::result::Result<Vec<&'static str>, StorageError> {
    for table in tables {
        for reference in table.references {
            if !tables.iter().any(|t| t.name == *reference) {
                return Err(StorageError::Schema(format!(
                    "table {} references undeclared table {}",
                    table.name, reference
                )));
            }
        }
    }

    let mut ordered: Vec<&'static str> = Vec::with_capacity(tables.len());
    while ordered.len() < tables.len() {
        let next = tables.iter().find(|table| {
            !ordered.contains(&table.name)
                && table
                    .references
                    .iter()
                    .all(|r| *r == table.name || ordered.contains(r))
        });

        match next {
            Some(table) => ordered.push(table.name),
            None => {
                let stuck: Vec<&str> = tables
                    .iter()
                    .map(|t| t.name)
                    .filter(|name| !ordered.contains(name))
                    .collect();
                return Err(StorageError::Schema(format!(
                    "foreign key cycle between: {}",
                    stuck.join(", ")
                )));
            }
        }
    }

    Ok(ordered)
}

/// Parents before children
pub fn insertion_order() -> std::result::Result<Vec<&'static str>, StorageError> {
    topological_order(TABLES)
}

/// Children before parents
pub fn deletion_order() -> std::result::Result<Vec<&'static str>, StorageError> {
    let mut order = insertion_order()?;
    order.reverse();
    Ok(order)
}

/// Delete every row of every table, dependents first
pub async fn clear_all(conn: &mut SqliteConnection) -> Result<()> {
    for table in deletion_order()? {
        let sql = format!("DELETE FROM {}", table);
        let result = sqlx::query(&sql).execute(&mut *conn).await?;
        tracing::debug!(table, rows = result.rows_affected(), "Cleared table");
    }
    Ok(())
}

/// Row count per table, in insertion order
pub async fn row_counts(pool: &SqlitePool) -> Result<Vec<(&'static str, i64)>> {
    let mut counts = Vec::with_capacity(TABLES.len());
    for table in insertion_order()? {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(pool).await?;
        counts.push((table, count));
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[&str], name: &str) -> usize {
        order.iter().position(|t| *t == name).unwrap()
    }

    #[test]
    fn insertion_order_puts_parents_first() {
        let order = insertion_order().unwrap();
        assert_eq!(
            order,
            vec![
                "artists",
                "albums",
                "genres",
                "tracks",
                "track_genres",
                "playlists",
                "playlist_items"
            ]
        );

        for table in TABLES {
            for reference in table.references {
                assert!(position(&order, reference) < position(&order, table.name));
            }
        }
    }

    #[test]
    fn deletion_order_puts_children_first() {
        let order = deletion_order().unwrap();
        assert_eq!(order.first(), Some(&"playlist_items"));
        assert!(position(&order, "track_genres") < position(&order, "tracks"));
        assert!(position(&order, "tracks") < position(&order, "albums"));
        assert!(position(&order, "albums") < position(&order, "artists"));
    }

    #[test]
    fn declaration_order_does_not_matter() {
        let shuffled = [
            TableDef::new("playlist_items", &["playlists", "tracks"]),
            TableDef::new("tracks", &["albums", "artists"]),
            TableDef::new("playlists", &[]),
            TableDef::new("albums", &["artists"]),
            TableDef::new("artists", &[]),
        ];
        let order = topological_order(&shuffled).unwrap();
        assert_eq!(
            order,
            vec!["playlists", "artists", "albums", "tracks", "playlist_items"]
        );
    }

    #[test]
    fn self_reference_is_allowed() {
        let tables = [TableDef::new("folders", &["folders"])];
        assert_eq!(topological_order(&tables).unwrap(), vec!["folders"]);
    }

    #[test]
    fn cycle_is_rejected() {
        let tables = [
            TableDef::new("a", &["b"]),
            TableDef::new("b", &["a"]),
            TableDef::new("c", &[]),
        ];
        let err = topological_order(&tables).unwrap_err();
        assert!(err.to_string().contains("cycle between: a, b"));
    }

    #[test]
    fn undeclared_reference_is_rejected() {
        let tables = [TableDef::new("albums", &["artists"])];
        let err = topological_order(&tables).unwrap_err();
        assert!(err.to_string().contains("undeclared table artists"));
    }
}
