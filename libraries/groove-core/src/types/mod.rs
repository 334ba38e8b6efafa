mod album;
mod artist;
mod genre;
mod page;
mod playlist;
mod track;

pub use album::{Album, AlbumId, CreateAlbum};
pub use artist::{Artist, ArtistId};
pub use genre::{Genre, GenreId, TrackGenre};
pub use page::PageData;
pub use playlist::{Playlist, PlaylistDetails, PlaylistId, PlaylistItem, PlaylistItemId};
pub use track::{CreateTrack, Track, TrackDetails, TrackId};
