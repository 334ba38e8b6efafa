//! Fixture seeding
//!
//! `run` wipes the store and loads the fixture dataset inside a single
//! transaction. Names in the fixture are resolved to the ids the store hands
//! back; an unknown name aborts the run and nothing is committed.
//!
//! The routine assumes exclusive access to the store while it runs.

pub mod fixtures;

use crate::{albums, artists, genres, playlists, schema, tracks};
use fixtures::{TrackFixture, ALBUMS, ALL_TRACKS_PLAYLIST, ARTISTS, DURATION_RANGE, GENRES};
use groove_core::{error::Result, types::*, GrooveError};
use rand::Rng;
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::HashMap;
use tracing::info;

/// Rows written by a seed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub artists: usize,
    pub albums: usize,
    pub genres: usize,
    pub tracks: usize,
    pub track_genres: usize,
    pub playlists: usize,
    pub playlist_items: usize,
}

/// Name to id lookup built from freshly inserted rows
struct NameIndex {
    kind: &'static str,
    ids: HashMap<String, i64>,
}

impl NameIndex {
    fn new(kind: &'static str, rows: impl IntoIterator<Item = (String, i64)>) -> Self {
        Self {
            kind,
            ids: rows.into_iter().collect(),
        }
    }

    fn resolve(&self, name: &str) -> Result<i64> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| GrooveError::unresolved(self.kind, name))
    }
}

/// Draw a track duration in seconds
pub fn random_duration<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(DURATION_RANGE)
}

/// Clear the store and load the full fixture dataset
pub async fn run<R: Rng + ?Sized>(pool: &SqlitePool, rng: &mut R) -> Result<SeedReport> {
    let literal = fixtures::literal_tracks();
    let placeholders = fixtures::placeholder_tracks(fixtures::PLACEHOLDER_TRACK_COUNT);

    run_with(pool, rng, &literal, &placeholders).await
}

/// Clear the store and load the fixed artists, albums and genres plus the
/// given tracks
///
/// `literal` and `generated` are inserted as two separate batches, in that
/// order; the "All Tracks" playlist follows the same order.
pub async fn run_with<R: Rng + ?Sized>(
    pool: &SqlitePool,
    rng: &mut R,
    literal: &[TrackFixture],
    generated: &[TrackFixture],
) -> Result<SeedReport> {
    info!("Seeding database...");

    let mut tx = pool.begin().await?;

    schema::clear_all(&mut *tx).await?;
    let report = insert_fixture(&mut *tx, rng, literal, generated).await?;

    tx.commit().await?;

    info!(
        artists = report.artists,
        albums = report.albums,
        genres = report.genres,
        tracks = report.tracks,
        track_genres = report.track_genres,
        playlist_items = report.playlist_items,
        "Database seeded successfully"
    );

    Ok(report)
}

async fn insert_fixture<R: Rng + ?Sized>(
    conn: &mut SqliteConnection,
    rng: &mut R,
    literal: &[TrackFixture],
    generated: &[TrackFixture],
) -> Result<SeedReport> {
    let inserted_artists = artists::create_many(conn, ARTISTS).await?;
    let artist_ids = NameIndex::new(
        "artist",
        inserted_artists.iter().map(|a| (a.name.clone(), a.id)),
    );

    let albums_to_insert = ALBUMS
        .iter()
        .map(|album| {
            Ok(CreateAlbum {
                name: album.name.to_string(),
                artist_id: Some(artist_ids.resolve(album.artist)?),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let inserted_albums = albums::create_many(conn, &albums_to_insert).await?;
    let album_ids = NameIndex::new(
        "album",
        inserted_albums.iter().map(|a| (a.name.clone(), a.id)),
    );

    let inserted_genres = genres::create_many(conn, GENRES).await?;
    let genre_ids = NameIndex::new(
        "genre",
        inserted_genres.iter().map(|g| (g.name.clone(), g.id)),
    );

    let mut inserted_tracks = Vec::with_capacity(literal.len() + generated.len());
    for batch in [literal, generated] {
        let rows = batch
            .iter()
            .map(|track| {
                Ok(CreateTrack {
                    title: track.title.clone(),
                    album_id: Some(album_ids.resolve(track.album)?),
                    artist_id: Some(artist_ids.resolve(track.artist)?),
                    duration: random_duration(rng),
                    audio_src: track.audio_src.to_string(),
                    cover_art: track.cover_art.map(str::to_string),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        inserted_tracks.extend(tracks::create_many(conn, &rows).await?);
    }

    // Batches come back in insertion order, so fixtures and rows line up
    let mut links = Vec::new();
    for (fixture, track) in literal.iter().chain(generated).zip(&inserted_tracks) {
        for genre in fixture.genres {
            links.push(TrackGenre {
                track_id: track.id,
                genre_id: genre_ids.resolve(genre)?,
            });
        }
    }
    let track_genres = genres::link_tracks(conn, &links).await?;

    let playlist = playlists::create(conn, ALL_TRACKS_PLAYLIST).await?;
    let track_ids: Vec<TrackId> = inserted_tracks.iter().map(|t| t.id).collect();
    let items = playlists::add_tracks(conn, playlist.id, &track_ids).await?;

    Ok(SeedReport {
        artists: inserted_artists.len(),
        albums: inserted_albums.len(),
        genres: inserted_genres.len(),
        tracks: inserted_tracks.len(),
        track_genres: track_genres as usize,
        playlists: 1,
        playlist_items: items.len(),
    })
}
