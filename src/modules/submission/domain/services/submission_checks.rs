//! Rule checks that only need the submission itself.

use crate::modules::submission::domain::entities::Submission;
use crate::modules::submission::domain::value_objects::{LinkDomain, MediaMetadata};
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    static ref ALBUM_STREAM_TITLE: Regex = Regex::new(r"(?i)full.?album|album.?stream").unwrap();
}

/// Whether the link is a full album rather than a single song.
///
/// YouTube: the media title says so, or the link is a playlist.
/// Other providers: the URL is an album page.
pub fn is_album_stream(submission: &Submission) -> bool {
    match submission.link_domain() {
        LinkDomain::YouTube => {
            let titled_as_album = match submission.metadata() {
                MediaMetadata::YouTube { title, .. } => ALBUM_STREAM_TITLE.is_match(title),
                _ => false,
            };
            titled_as_album || submission.url.contains("/playlist?")
        }
        _ => submission.url.contains("/album/"),
    }
}

/// Whether the poster's username appears in the artist name.
///
/// Spaces are stripped from the artist first, so "Plini" posting as
/// `plini` and "Arch Echo" posting as `archecho` are both caught.
pub fn is_self_promotion(submission: &Submission, artist: &str) -> bool {
    let author = submission.author.trim().to_lowercase();
    if author.is_empty() {
        return false;
    }
    let artist_compact: String = artist
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    let matched = artist_compact.contains(&author);
    if matched {
        log::info!(
            "Username \"{}\" matches artist \"{}\"",
            submission.author,
            artist
        );
    }
    matched
}

/// A self post whose whole body is one link to an accepted media domain
pub fn is_lazy_link_post(submission: &Submission) -> bool {
    if !submission.is_self {
        return false;
    }
    let body = match submission.selftext.as_deref().map(str::trim) {
        Some(body) if !body.is_empty() => body,
        _ => return false,
    };
    if body.split_whitespace().count() != 1 {
        return false;
    }
    match Url::parse(body) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url
            .host_str()
            .map(|host| LinkDomain::classify(host).is_supported())
            .unwrap_or(false),
        _ => false,
    }
}
