use crate::shared::utils::text::comparison_key;
use serde::{Deserialize, Serialize};
use std::fmt;

/// (artist, song) read out of a submission title.
///
/// `song == None` means the grammar rejected the title; `artist` then holds
/// the whole (folded) title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleGuess {
    pub artist: String,
    pub song: Option<String>,
}

impl TitleGuess {
    pub fn new(artist: impl Into<String>, song: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            song: Some(song.into()),
        }
    }

    pub fn unparsed(title: impl Into<String>) -> Self {
        Self {
            artist: title.into(),
            song: None,
        }
    }

    /// Both fields present and non-blank
    pub fn is_complete(&self) -> bool {
        !self.artist.trim().is_empty()
            && self
                .song
                .as_deref()
                .map(|song| !song.trim().is_empty())
                .unwrap_or(false)
    }

    /// `artist -- song` (song omitted when absent) as a comparison key
    pub fn comparison_key(&self) -> String {
        match self.song.as_deref() {
            Some(song) => comparison_key(&format!("{} -- {}", self.artist, song)),
            None => comparison_key(&self.artist),
        }
    }
}

impl fmt::Display for TitleGuess {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.song {
            Some(song) => write!(f, "{} - {}", self.artist, song),
            None => write!(f, "{}", self.artist),
        }
    }
}
