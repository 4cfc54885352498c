use crate::modules::submission::domain::value_objects::{CanonicalUrl, LinkDomain, MediaMetadata};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

static NO_METADATA: MediaMetadata = MediaMetadata::Other;

/// Read-only snapshot of a community submission as delivered by the feed.
///
/// Content fields never change; `archived` and `removed` reflect the source at
/// the time the snapshot was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub title: String,
    pub url: String,
    pub domain: String,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub is_self: bool,
    /// Body text, only present on self posts
    pub selftext: Option<String>,
    pub media_metadata: Option<MediaMetadata>,
    pub archived: bool,
    pub removed: bool,
}

impl Submission {
    /// New link submission with no embed metadata and clean status flags
    pub fn link(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        domain: impl Into<String>,
        author: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            domain: domain.into(),
            created_at,
            author: author.into(),
            is_self: false,
            selftext: None,
            media_metadata: None,
            archived: false,
            removed: false,
        }
    }

    pub fn with_media_metadata(mut self, metadata: MediaMetadata) -> Self {
        self.media_metadata = Some(metadata);
        self
    }

    pub fn link_domain(&self) -> LinkDomain {
        LinkDomain::classify(&self.domain)
    }

    pub fn canonical_url(&self) -> CanonicalUrl {
        CanonicalUrl::from_url(&self.url)
    }

    /// Embed metadata, with `Other` standing in for a missing blob
    pub fn metadata(&self) -> &MediaMetadata {
        self.media_metadata.as_ref().unwrap_or(&NO_METADATA)
    }

    /// Whether this submission can still be matched against later ones
    pub fn is_live(&self) -> bool {
        !self.archived && !self.removed
    }

    pub fn is_strictly_older_than(&self, other: &Submission) -> bool {
        self.created_at < other.created_at
    }

    /// True when `self` was created no earlier than `lookback` before `reference`
    pub fn is_within(&self, lookback: Duration, reference: DateTime<Utc>) -> bool {
        self.created_at >= reference - lookback
    }
}
