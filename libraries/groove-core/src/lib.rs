//! Groove Core
//!
//! Domain types, the storage read trait, and error handling shared by every
//! Groove crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Row Types**: `Artist`, `Album`, `Track`, `Genre`, `TrackGenre`,
//!   `Playlist`, `PlaylistItem`, one per table
//! - **Documents**: `TrackDetails`, `PlaylistDetails` and `PageData`, the
//!   nested shapes served to the front end
//! - **Core Traits**: `LibraryReader`
//! - **Error Handling**: Unified `GrooveError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use groove_core::types::{Artist, Track, TrackDetails};
//!
//! let artist = Artist { id: 1, name: "NAUTILUS".to_string() };
//! let track = Track {
//!     id: 1,
//!     title: "Virtual Insanity".to_string(),
//!     album_id: None,
//!     artist_id: Some(artist.id),
//!     duration: 240,
//!     audio_src: "/audio/nautilus-virtual-insanity.flac".to_string(),
//!     cover_art: None,
//! };
//!
//! let details = TrackDetails::new(track, Some(artist), None, Vec::new());
//! assert_eq!(details.artist_name(), Some("NAUTILUS"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{GrooveError, Result};
pub use storage::LibraryReader;

pub use types::{
    Album, AlbumId, Artist, ArtistId, CreateAlbum, CreateTrack, Genre, GenreId, PageData,
    Playlist, PlaylistDetails, PlaylistId, PlaylistItem, PlaylistItemId, Track, TrackDetails,
    TrackGenre, TrackId,
};
