//! Offline export of the API documents
//!
//! Every response is a pure function of the store, which only changes when
//! the seed loader runs, so the documents can be written once and served as
//! static files.

use crate::error::Result;
use groove_core::{storage::LibraryReader, types::PageData};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Files written by an export run, relative to the output directory
pub const GENRES_FILE: &str = "api/genres.json";
pub const TRACKS_FILE: &str = "api/tracks.json";
pub const PLAYLISTS_FILE: &str = "api/playlists.json";
pub const PAGE_FILE: &str = "page.json";

/// Load the three listings concurrently and merge them into one page
///
/// Fails as a whole if any listing fails.
pub async fn load_page<R: LibraryReader + ?Sized>(reader: &R) -> Result<PageData> {
    let (tracks, playlists, genres) = tokio::try_join!(
        reader.get_all_tracks(),
        reader.get_all_playlists(),
        reader.get_all_genres()
    )?;

    Ok(PageData::new(tracks, playlists, genres))
}

/// Write every API document and the merged page under `out_dir`
pub async fn export_all<R: LibraryReader + ?Sized>(
    reader: &R,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let page = load_page(reader).await?;

    let written = vec![
        write_json(out_dir, GENRES_FILE, &page.genres).await?,
        write_json(out_dir, TRACKS_FILE, &page.tracks).await?,
        write_json(out_dir, PLAYLISTS_FILE, &page.playlists).await?,
        write_json(out_dir, PAGE_FILE, &page).await?,
    ];

    info!(
        out_dir = %out_dir.display(),
        tracks = page.tracks.len(),
        playlists = page.playlists.len(),
        genres = page.genres.len(),
        "Export complete"
    );

    Ok(written)
}

async fn write_json<T: Serialize + ?Sized>(
    out_dir: &Path,
    relative: &str,
    value: &T,
) -> Result<PathBuf> {
    let path = out_dir.join(relative);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let bytes = serde_json::to_vec(value)?;
    tokio::fs::write(&path, bytes).await?;
    tracing::debug!(path = %path.display(), "Wrote document");

    Ok(path)
}
