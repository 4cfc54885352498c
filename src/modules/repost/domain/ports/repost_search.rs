use crate::modules::submission::Submission;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the query string of a history search is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchContext {
    /// Query is a canonical URL
    Url,
    /// Query is a normalized `artist -- song` title key
    Title,
}

impl fmt::Display for SearchContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchContext::Url => write!(f, "url"),
            SearchContext::Title => write!(f, "title"),
        }
    }
}

/// Port onto the community's submission history.
///
/// Implementations return at most `max_results` submissions created within
/// `lookback`, newest first. They may over-match; the detector filters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepostSearch: Send + Sync {
    async fn search(
        &self,
        context: SearchContext,
        query: &str,
        lookback: Duration,
        max_results: usize,
    ) -> AppResult<Vec<Submission>>;
}
