//! Boundary decoding of raw oEmbed blobs into [`MediaMetadata`].

use crate::modules::submission::domain::value_objects::{LinkDomain, MediaMetadata};
use crate::shared::errors::AppResult;
use serde::Deserialize;

/// The subset of an oEmbed response the moderation checks read
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OEmbedPayload {
    #[serde(default)]
    pub provider_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl OEmbedPayload {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Map onto the provider variant for `domain`.
    ///
    /// A payload missing the field its provider needs becomes `Other`.
    pub fn into_metadata(self, domain: &LinkDomain) -> MediaMetadata {
        match domain {
            LinkDomain::Spotify => match self.description {
                Some(description) => MediaMetadata::Spotify { description },
                None => MediaMetadata::Other,
            },
            LinkDomain::Bandcamp => match self.title {
                Some(title) => MediaMetadata::Bandcamp { title },
                None => MediaMetadata::Other,
            },
            LinkDomain::YouTube => match (self.author_name, self.title) {
                (Some(author_name), Some(title)) => MediaMetadata::YouTube { author_name, title },
                _ => MediaMetadata::Other,
            },
            LinkDomain::SoundCloud => MediaMetadata::SoundCloud,
            LinkDomain::Unsupported(_) => MediaMetadata::Other,
        }
    }
}

/// Decode a raw blob for `domain`; undecodable JSON is treated as no metadata
pub fn decode_media_metadata(domain: &LinkDomain, raw: &str) -> MediaMetadata {
    match OEmbedPayload::from_json(raw) {
        Ok(payload) => payload.into_metadata(domain),
        Err(e) => {
            log::debug!("Ignoring undecodable oEmbed blob for {}: {}", domain, e);
            MediaMetadata::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_youtube() {
        let raw = r#"{"type":"video","provider_name":"YouTube","title":"Haken - Nil By Mouth","author_name":"InsideOutMusicTV","thumbnail_url":"x"}"#;
        assert_eq!(
            decode_media_metadata(&LinkDomain::YouTube, raw),
            MediaMetadata::YouTube {
                author_name: "InsideOutMusicTV".to_string(),
                title: "Haken - Nil By Mouth".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_spotify_and_bandcamp() {
        let spotify = r#"{"description":"Ghost of Perdition, a song by Opeth on Spotify","title":"Ghost of Perdition"}"#;
        assert_eq!(
            decode_media_metadata(&LinkDomain::Spotify, spotify),
            MediaMetadata::Spotify {
                description: "Ghost of Perdition, a song by Opeth on Spotify".to_string()
            }
        );

        let bandcamp = r#"{"title":"Distant Bells, by Leprous","author_name":"Leprous"}"#;
        assert_eq!(
            decode_media_metadata(&LinkDomain::Bandcamp, bandcamp),
            MediaMetadata::Bandcamp {
                title: "Distant Bells, by Leprous".to_string()
            }
        );
    }

    #[test]
    fn test_missing_required_field_decodes_to_other() {
        let raw = r#"{"title":"only a title"}"#;
        assert_eq!(
            decode_media_metadata(&LinkDomain::YouTube, raw),
            MediaMetadata::Other
        );
        assert_eq!(
            decode_media_metadata(&LinkDomain::Spotify, raw),
            MediaMetadata::Other
        );
    }

    #[test]
    fn test_soundcloud_and_garbage() {
        assert_eq!(
            decode_media_metadata(&LinkDomain::SoundCloud, r#"{"title":"x"}"#),
            MediaMetadata::SoundCloud
        );
        assert_eq!(
            decode_media_metadata(&LinkDomain::YouTube, "not json"),
            MediaMetadata::Other
        );
    }
}
