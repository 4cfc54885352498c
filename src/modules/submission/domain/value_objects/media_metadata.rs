use serde::{Deserialize, Serialize};

/// Embed metadata of a link, decoded once per provider.
///
/// Only the fields the extractor reads are kept. A blob missing its
/// provider's required field decodes to `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum MediaMetadata {
    Spotify { description: String },
    Bandcamp { title: String },
    YouTube { author_name: String, title: String },
    SoundCloud,
    Other,
}

impl MediaMetadata {
    /// Provider's combined title string, if the variant carries one
    pub fn raw_title(&self) -> Option<&str> {
        match self {
            MediaMetadata::Spotify { description } => Some(description),
            MediaMetadata::Bandcamp { title } => Some(title),
            MediaMetadata::YouTube { title, .. } => Some(title),
            MediaMetadata::SoundCloud | MediaMetadata::Other => None,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, MediaMetadata::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_title_per_provider() {
        let yt = MediaMetadata::YouTube {
            author_name: "Haken".to_string(),
            title: "Haken - Atlas Stone".to_string(),
        };
        assert_eq!(yt.raw_title(), Some("Haken - Atlas Stone"));

        let spotify = MediaMetadata::Spotify {
            description: "Atlas Stone, a song by Haken on Spotify".to_string(),
        };
        assert_eq!(
            spotify.raw_title(),
            Some("Atlas Stone, a song by Haken on Spotify")
        );

        assert_eq!(MediaMetadata::SoundCloud.raw_title(), None);
        assert_eq!(MediaMetadata::Other.raw_title(), None);
    }

    #[test]
    fn test_serde_tagging() {
        let metadata = MediaMetadata::Bandcamp {
            title: "Luminary, by Leprous".to_string(),
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["provider"], "bandcamp");
        assert_eq!(json["title"], "Luminary, by Leprous");

        let back: MediaMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(back, metadata);
    }
}
