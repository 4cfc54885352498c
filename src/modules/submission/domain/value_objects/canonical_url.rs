use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Comparable form of a submission URL.
///
/// YouTube links collapse to `youtube:<video id>` whichever share form was
/// used. Everything else loses scheme, `www.`/`m.` prefix, query, fragment and
/// trailing slash, and is lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalUrl(String);

impl CanonicalUrl {
    pub fn from_url(raw: &str) -> Self {
        let trimmed = raw.trim();
        match Url::parse(trimmed) {
            Ok(parsed) => {
                if let Some(video_id) = youtube_video_id(&parsed) {
                    return CanonicalUrl(format!("youtube:{}", video_id));
                }
                CanonicalUrl(generic_form(&parsed))
            }
            Err(_) => CanonicalUrl(fallback_form(trimmed)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_youtube_video(&self) -> bool {
        self.0.starts_with("youtube:")
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_video_id(candidate: &str) -> bool {
    candidate.len() == 11
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn youtube_video_id(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

    let candidate = if host.ends_with("youtu.be") {
        segments.next().map(str::to_string)
    } else if host.ends_with("youtube.com") {
        match segments.next() {
            Some("watch") => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            Some("embed") | Some("shorts") | Some("v") | Some("live") => {
                segments.next().map(str::to_string)
            }
            _ => None,
        }
    } else {
        None
    }?;

    is_video_id(&candidate).then_some(candidate)
}

fn strip_host_prefix(host: &str) -> &str {
    host.strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .unwrap_or(host)
}

fn generic_form(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_lowercase();
    let path = url.path().trim_end_matches('/');
    format!("{}{}", strip_host_prefix(&host), path).to_lowercase()
}

fn fallback_form(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let without_scheme = lowered
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(lowered.as_str());
    let without_query = without_scheme
        .split(&['?', '#'][..])
        .next()
        .unwrap_or_default();
    strip_host_prefix(without_query)
        .trim_end_matches('/')
        .to_string()
}
