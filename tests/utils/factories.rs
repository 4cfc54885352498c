/// Test data factories using builder pattern
///
/// Provides convenient methods to create submissions with sensible defaults.
/// Ages are relative to now so they always fall inside or outside the
/// lookback window as intended.
use chrono::{DateTime, Duration, Utc};
use riffwarden::modules::submission::{MediaMetadata, Submission};

pub struct SubmissionFactory {
    id: String,
    title: String,
    url: String,
    domain: String,
    author: String,
    created_at: DateTime<Utc>,
    is_self: bool,
    selftext: Option<String>,
    media_metadata: Option<MediaMetadata>,
    archived: bool,
    removed: bool,
}

impl Default for SubmissionFactory {
    fn default() -> Self {
        Self {
            id: format!("t3_{}", rand::random::<u32>() % 1_000_000 + 1000),
            title: "Haken - Atlas Stone".to_string(),
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            domain: "youtube.com".to_string(),
            author: "listener".to_string(),
            created_at: Utc::now(),
            is_self: false,
            selftext: None,
            media_metadata: None,
            archived: false,
            removed: false,
        }
    }
}

impl SubmissionFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// YouTube link whose embed metadata agrees with the title
    pub fn youtube(artist: &str, song: &str) -> Self {
        Self::new()
            .title(&format!("{} - {}", artist, song))
            .youtube_metadata(&format!("{} Official", artist), &format!("{} - {}", artist, song))
    }

    /// Self post with the given body
    pub fn self_post(body: &str) -> Self {
        Self {
            title: "Thoughts?".to_string(),
            url: "https://www.reddit.com/r/progmetal/comments/abc".to_string(),
            domain: "self.progmetal".to_string(),
            is_self: true,
            selftext: Some(body.to_string()),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    pub fn days_ago(mut self, days: i64) -> Self {
        self.created_at = Utc::now() - Duration::days(days);
        self
    }

    pub fn hours_ago(mut self, hours: i64) -> Self {
        self.created_at = Utc::now() - Duration::hours(hours);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn metadata(mut self, metadata: MediaMetadata) -> Self {
        self.media_metadata = Some(metadata);
        self
    }

    pub fn youtube_metadata(self, author_name: &str, title: &str) -> Self {
        self.metadata(MediaMetadata::YouTube {
            author_name: author_name.to_string(),
            title: title.to_string(),
        })
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    pub fn removed(mut self) -> Self {
        self.removed = true;
        self
    }

    pub fn build(self) -> Submission {
        let mut submission = Submission::link(
            self.id,
            self.title,
            self.url,
            self.domain,
            self.author,
            self.created_at,
        );
        submission.is_self = self.is_self;
        submission.selftext = self.selftext;
        submission.media_metadata = self.media_metadata;
        submission.archived = self.archived;
        submission.removed = self.removed;
        submission
    }
}
