use serde::{Deserialize, Serialize};

/// (artist, song) read out of provider metadata.
///
/// `artist == None`: aggregator channel, artist unknowable.
/// `song == None`: the raw media title could not be split; `artist` then
/// holds that raw title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkGuess {
    pub artist: Option<String>,
    pub song: Option<String>,
}

impl LinkGuess {
    pub fn new(artist: impl Into<String>, song: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            song: Some(song.into()),
        }
    }

    pub fn unknown_artist(song: impl Into<String>) -> Self {
        Self {
            artist: None,
            song: Some(song.into()),
        }
    }

    pub fn unsplit(raw_title: impl Into<String>) -> Self {
        Self {
            artist: Some(raw_title.into()),
            song: None,
        }
    }
}
