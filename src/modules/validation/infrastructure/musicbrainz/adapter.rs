use super::config::MusicBrainzConfig;
use super::mapper::MusicBrainzMapper;
use super::models::RecordingSearch;
use crate::modules::validation::domain::ports::MusicSearchOracle;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::http_client::RateLimitClient;
use crate::shared::utils::LogContext;
use async_trait::async_trait;
use std::time::Instant;

/// MusicBrainz recording search behind the [`MusicSearchOracle`] port
pub struct MusicBrainzOracle {
    http_client: RateLimitClient,
    base_url: String,
    result_limit: u32,
    mapper: MusicBrainzMapper,
}

impl MusicBrainzOracle {
    pub fn new(config: &MusicBrainzConfig) -> AppResult<Self> {
        config.validate()?;
        let http_client = RateLimitClient::for_musicbrainz(&config.user_agent, config.timeout)?;
        Ok(Self::with_client(http_client, config))
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: RateLimitClient, config: &MusicBrainzConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            result_limit: config.result_limit,
            mapper: MusicBrainzMapper::new(config.min_score),
        }
    }

    /// Non-strict Lucene query: either field may match and longer words match
    /// fuzzily, so a misspelled artist still surfaces the right recording
    pub fn build_query(artist: &str, song: &str) -> String {
        [("artist", artist), ("recording", song)]
            .iter()
            .filter_map(|(field, text)| {
                let terms = fuzzy_terms(text);
                (!terms.is_empty()).then(|| format!("{}:({})", field, terms))
            })
            .collect::<Vec<String>>()
            .join(" OR ")
    }

    pub fn search_url(&self, artist: &str, song: &str) -> String {
        format!(
            "{}/recording?query={}&fmt=json&limit={}",
            self.base_url,
            urlencoding::encode(&Self::build_query(artist, song)),
            self.result_limit
        )
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }
}

const LUCENE_SPECIAL: &[char] = &[
    '+', '-', '&', '|', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '\\',
    '/',
];

/// Words shorter than this are matched exactly
const MIN_FUZZY_LEN: usize = 4;

/// Lowercased so words like `OR` never read as operators
fn fuzzy_terms(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let word = word.to_lowercase();
            let fuzzy = word.chars().count() >= MIN_FUZZY_LEN
                && word.chars().all(char::is_alphanumeric);
            let mut term = escape_term(&word);
            if fuzzy {
                term.push('~');
            }
            term
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn escape_term(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for c in word.chars() {
        if LUCENE_SPECIAL.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl MusicSearchOracle for MusicBrainzOracle {
    async fn search_track(&self, artist: &str, song: &str) -> AppResult<Vec<String>> {
        let url = self.search_url(artist, song);
        LogContext::api_call(self.name(), "recording search", "started", None);

        let started = Instant::now();
        let search: RecordingSearch = self.http_client.get(&url).await?;
        LogContext::api_call(
            self.name(),
            "recording search",
            "OK",
            Some(started.elapsed().as_millis() as u64),
        );

        let results = self.mapper.map_search(&search);
        log::debug!(
            "MusicBrainz: {} of {} recordings usable for '{} - {}'",
            results.len(),
            search.count,
            artist,
            song
        );
        Ok(results)
    }

    fn name(&self) -> &'static str {
        "MusicBrainz"
    }
}
