//! Fixture dataset loaded by the seed routine

use std::ops::RangeInclusive;

/// Every seeded track gets a duration drawn from this range, in seconds
pub const DURATION_RANGE: RangeInclusive<i64> = 180..=300;

/// Number of generated placeholder tracks
pub const PLACEHOLDER_TRACK_COUNT: usize = 13;

/// Name of the playlist holding every seeded track
pub const ALL_TRACKS_PLAYLIST: &str = "All Tracks";

pub const ARTISTS: &[&str] = &[
    "NAUTILUS",
    "AC/DC",
    "Andie",
    "Ravyn Lenae",
    "Rex Orange County",
    "Vanilla Ice",
    "The Doors",
    "Danny Vera",
    "Bon Jovi",
    "Leon Thomas",
    "Rick Astley",
    "Bruno Mars",
    "Placeholder Artist 1",
    "Placeholder Artist 2",
    "Placeholder Artist 3",
];

#[derive(Debug, Clone, Copy)]
pub struct AlbumFixture {
    pub name: &'static str,
    pub artist: &'static str,
}

pub const ALBUMS: &[AlbumFixture] = &[
    AlbumFixture {
        name: "Virtual Insanity",
        artist: "NAUTILUS",
    },
    AlbumFixture {
        name: "Live",
        artist: "AC/DC",
    },
    AlbumFixture {
        name: "Time Moves Slow",
        artist: "Andie",
    },
    AlbumFixture {
        name: "Love Me Not",
        artist: "Ravyn Lenae",
    },
    AlbumFixture {
        name: "To the Extreme",
        artist: "Vanilla Ice",
    },
    AlbumFixture {
        name: "The Doors",
        artist: "The Doors",
    },
    AlbumFixture {
        name: "Roller Coaster",
        artist: "Danny Vera",
    },
    AlbumFixture {
        name: "Cross Road",
        artist: "Bon Jovi",
    },
    AlbumFixture {
        name: "Electric Soul",
        artist: "Leon Thomas",
    },
    AlbumFixture {
        name: "Whenever You Need Somebody",
        artist: "Rick Astley",
    },
    AlbumFixture {
        name: "Die With A Smile",
        artist: "Bruno Mars",
    },
    AlbumFixture {
        name: "Placeholder Album 1",
        artist: "Placeholder Artist 1",
    },
    AlbumFixture {
        name: "Placeholder Album 2",
        artist: "Placeholder Artist 2",
    },
    AlbumFixture {
        name: "Placeholder Album 3",
        artist: "Placeholder Artist 3",
    },
];

pub const GENRES: &[&str] = &[
    "Rock",
    "Pop",
    "Electronic",
    "Jazz",
    "Hip-Hop",
    "Acoustic",
    "Alternative",
    "R&B",
    "Classical",
];

/// A track to seed; album, artist and genres are referenced by name
#[derive(Debug, Clone)]
pub struct TrackFixture {
    pub title: String,
    pub album: &'static str,
    pub artist: &'static str,
    pub audio_src: &'static str,
    pub cover_art: Option<&'static str>,
    pub genres: &'static [&'static str],
}

/// A track spelled out in the fixture table
#[derive(Debug, Clone, Copy)]
pub struct LiteralTrack {
    title: &'static str,
    album: &'static str,
    artist: &'static str,
    audio_src: &'static str,
    cover_art: &'static str,
    genres: &'static [&'static str],
}

impl LiteralTrack {
    const fn new(
        title: &'static str,
        album: &'static str,
        artist: &'static str,
        audio_src: &'static str,
        cover_art: &'static str,
        genres: &'static [&'static str],
    ) -> Self {
        Self {
            title,
            album,
            artist,
            audio_src,
            cover_art,
            genres,
        }
    }
}

impl From<&LiteralTrack> for TrackFixture {
    fn from(track: &LiteralTrack) -> Self {
        Self {
            title: track.title.to_string(),
            album: track.album,
            artist: track.artist,
            audio_src: track.audio_src,
            cover_art: Some(track.cover_art),
            genres: track.genres,
        }
    }
}

pub const LITERAL_TRACKS: &[LiteralTrack] = &[
    LiteralTrack::new(
        "Virtual Insanity",
        "Virtual Insanity",
        "NAUTILUS",
        "/audio/nautilus-virtual-insanity.flac",
        "/images/virtual-insanity.jpg",
        &["Jazz", "Electronic"],
    ),
    LiteralTrack::new(
        "Thunderstruck (Live)",
        "Live",
        "AC/DC",
        "/audio/ac-dc-brian-johnson-thunderstruck-live.flac",
        "/images/acdc.jpg",
        &["Rock"],
    ),
    LiteralTrack::new(
        "Back In Black (Live)",
        "Live",
        "AC/DC",
        "/audio/ac-dc-brian-johnson-back-in-black-live.flac",
        "/images/acdc.jpg",
        &["Rock"],
    ),
    LiteralTrack::new(
        "Time Moves Slow",
        "Time Moves Slow",
        "Andie",
        "/audio/andie-time-moves-slow.flac",
        "/images/time-moves-slow.jpg",
        &["Alternative", "R&B"],
    ),
    LiteralTrack::new(
        "Love Me Not",
        "Love Me Not",
        "Ravyn Lenae",
        "/audio/ravyn-lenae-rex-orange-county-love-me-not-feat-rex-orange-county.flac",
        "/images/love-me-or-not.jpg",
        &["R&B", "Pop"],
    ),
    LiteralTrack::new(
        "Jump Around",
        "To the Extreme",
        "Vanilla Ice",
        "/audio/vanilla-ice-jump-around.flac",
        "/images/jump-around.jpg",
        &["Hip-Hop"],
    ),
    LiteralTrack::new(
        "The Crystal Ship",
        "The Doors",
        "The Doors",
        "/audio/the-doors-the-crystal-ship.flac",
        "/images/the-crystal-ship.jpg",
        &["Rock", "Alternative"],
    ),
    LiteralTrack::new(
        "Roller Coaster",
        "Roller Coaster",
        "Danny Vera",
        "/audio/danny-vera-roller-coaster.flac",
        "/images/rollercoaster.jpg",
        &["Pop", "Acoustic"],
    ),
    LiteralTrack::new(
        "It's My Life (2003 Acoustic Version)",
        "Cross Road",
        "Bon Jovi",
        "/audio/bon-jovi-its-my-life-2003-acoustic-version.flac",
        "/images/its-my-life.jpg",
        &["Rock", "Acoustic"],
    ),
    LiteralTrack::new(
        "MUTT",
        "Electric Soul",
        "Leon Thomas",
        "/audio/leon-thomas-mutt.flac",
        "/images/mutt.jpeg",
        &["R&B", "Jazz"],
    ),
    LiteralTrack::new(
        "Never Gonna Give You Up (Pianoforte)",
        "Whenever You Need Somebody",
        "Rick Astley",
        "/audio/rick-astley-never-gonna-give-you-up-pianoforte.flac",
        "/images/never-gonna-give-you-up.jpg",
        &["Pop", "Acoustic"],
    ),
    LiteralTrack::new(
        "Die With A Smile",
        "Die With A Smile",
        "Bruno Mars",
        "/audio/die-with-a-smile.flac",
        "/images/die-with-a-smile.jpg",
        &["Pop", "R&B"],
    ),
];

/// The literal tracks, in fixture order
pub fn literal_tracks() -> Vec<TrackFixture> {
    LITERAL_TRACKS.iter().map(TrackFixture::from).collect()
}

/// Generated filler tracks, all on the first placeholder album
pub fn placeholder_tracks(count: usize) -> Vec<TrackFixture> {
    (1..=count)
        .map(|i| TrackFixture {
            title: format!("Placeholder Track {}", i),
            album: "Placeholder Album 1",
            artist: "Placeholder Artist 1",
            audio_src: "/audio/placeholder.mp3",
            cover_art: Some("/images/placeholder.jpg"),
            genres: &["Pop"],
        })
        .collect()
}
