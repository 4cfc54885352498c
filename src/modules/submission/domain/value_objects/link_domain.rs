use serde::{Deserialize, Serialize};
use std::fmt;

/// Media provider a link submission points at.
///
/// Classification is by substring so sub-domains (`m.youtube.com`,
/// `open.spotify.com`, `artist.bandcamp.com`) land on their provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkDomain {
    YouTube,
    Spotify,
    Bandcamp,
    SoundCloud,
    Unsupported(String),
}

impl LinkDomain {
    pub fn classify(domain: &str) -> Self {
        let lowered = domain.trim().to_lowercase();
        if lowered.contains("youtube.com") || lowered.contains("youtu.be") {
            LinkDomain::YouTube
        } else if lowered.contains("spotify.com") {
            LinkDomain::Spotify
        } else if lowered.contains("bandcamp.com") {
            LinkDomain::Bandcamp
        } else if lowered.contains("soundcloud.com") {
            LinkDomain::SoundCloud
        } else {
            LinkDomain::Unsupported(lowered)
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, LinkDomain::Unsupported(_))
    }

    pub fn display_name(&self) -> &str {
        match self {
            LinkDomain::YouTube => "youtube.com",
            LinkDomain::Spotify => "spotify.com",
            LinkDomain::Bandcamp => "bandcamp.com",
            LinkDomain::SoundCloud => "soundcloud.com",
            LinkDomain::Unsupported(host) => host,
        }
    }
}

impl fmt::Display for LinkDomain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl From<&str> for LinkDomain {
    fn from(s: &str) -> Self {
        LinkDomain::classify(s)
    }
}
