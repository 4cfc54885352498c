use crate::modules::link::domain::value_objects::LinkGuess;
use crate::modules::submission::{LinkDomain, MediaMetadata};
use crate::modules::title::TitleParser;
use crate::shared::errors::AppResult;
use crate::shared::utils::text::fold_diacritics;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SPOTIFY_DESCRIPTION: Regex = Regex::new(r"(?s)^(.*), a song by (.*) on Spotify").unwrap();
    static ref BANDCAMP_TITLE: Regex = Regex::new(r"(?s)^(.*), by (.*)$").unwrap();
}

const TOPIC_SUFFIX: &str = " - Topic";
const VARIOUS_ARTISTS: &str = "Various Artists";

/// Per-provider extraction of (artist, song) from embed metadata.
///
/// Never invents an artist: anything the metadata does not state comes back
/// as `None`, and providers without usable metadata yield no guess at all.
pub struct LinkExtractor {
    media_parser: TitleParser,
}

fn folded(text: &str) -> String {
    fold_diacritics(text).trim().to_string()
}

impl LinkExtractor {
    pub fn new() -> AppResult<Self> {
        Ok(Self::with_parser(TitleParser::for_media()?))
    }

    pub fn with_parser(media_parser: TitleParser) -> Self {
        Self { media_parser }
    }

    /// `None` means "nothing to cross-check", never a failure
    pub fn extract(&self, domain: &LinkDomain, metadata: &MediaMetadata) -> Option<LinkGuess> {
        let guess = match (domain, metadata) {
            (LinkDomain::Spotify, MediaMetadata::Spotify { description }) => {
                Self::extract_song_by_artist(&SPOTIFY_DESCRIPTION, description)
            }
            (LinkDomain::Bandcamp, MediaMetadata::Bandcamp { title }) => {
                Self::extract_song_by_artist(&BANDCAMP_TITLE, title)
            }
            (LinkDomain::YouTube, MediaMetadata::YouTube { author_name, title }) => {
                Some(self.extract_youtube(author_name, title))
            }
            // SoundCloud embeds carry nothing usable; mismatched pairs neither
            _ => None,
        };

        if guess.is_none() {
            log::debug!("No link guess for {} metadata", domain);
        }
        guess
    }

    /// Provider's combined title, folded, for literal substring checks
    pub fn raw_media_title(&self, metadata: &MediaMetadata) -> Option<String> {
        metadata.raw_title().map(folded)
    }

    /// `"{song}, <connector> {artist}"` shapes; album or playlist embeds do not match
    fn extract_song_by_artist(pattern: &Regex, text: &str) -> Option<LinkGuess> {
        let captures = pattern.captures(text)?;
        let song = folded(captures.get(1)?.as_str());
        let artist = folded(captures.get(2)?.as_str());
        Some(LinkGuess::new(artist, song))
    }

    fn extract_youtube(&self, author_name: &str, title: &str) -> LinkGuess {
        if let Some(channel_artist) = author_name.strip_suffix(TOPIC_SUFFIX) {
            // Auto-generated "Artist - Topic" channel: the video title is the song
            let song = folded(title);
            if author_name.contains(VARIOUS_ARTISTS) {
                return LinkGuess::unknown_artist(song);
            }
            return LinkGuess::new(folded(channel_artist), song);
        }

        let guess = self.media_parser.parse(title);
        if guess.is_complete() {
            LinkGuess {
                artist: Some(guess.artist),
                song: guess.song,
            }
        } else {
            LinkGuess::unsplit(folded(title))
        }
    }
}
