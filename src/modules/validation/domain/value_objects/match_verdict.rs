use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of reconciling a title guess with a link guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchVerdict {
    Match,
    AmbiguousArtist,
    AmbiguousSong,
    /// Supported provider, but its metadata gave nothing to compare
    NoLinkInfo,
    BadTitle,
    AlbumStream,
    UnsupportedDomain,
}

impl MatchVerdict {
    pub fn display_name(&self) -> &'static str {
        match self {
            MatchVerdict::Match => "Match",
            MatchVerdict::AmbiguousArtist => "Ambiguous Artist",
            MatchVerdict::AmbiguousSong => "Ambiguous Song",
            MatchVerdict::NoLinkInfo => "No Link Info",
            MatchVerdict::BadTitle => "Bad Title",
            MatchVerdict::AlbumStream => "Album Stream",
            MatchVerdict::UnsupportedDomain => "Unsupported Domain",
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, MatchVerdict::AmbiguousArtist | MatchVerdict::AmbiguousSong)
    }

    /// Verdicts after which the submission goes on to repost detection
    pub fn allows_repost_check(&self) -> bool {
        matches!(
            self,
            MatchVerdict::Match
                | MatchVerdict::NoLinkInfo
                | MatchVerdict::AmbiguousArtist
                | MatchVerdict::AmbiguousSong
        )
    }
}

impl fmt::Display for MatchVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
