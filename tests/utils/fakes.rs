/// Hand-written collaborators for integration tests
use async_trait::async_trait;
use chrono::Duration;
use riffwarden::modules::repost::{RepostSearch, SearchContext};
use riffwarden::modules::submission::Submission;
use riffwarden::modules::validation::MusicSearchOracle;
use riffwarden::shared::errors::{AppError, AppResult};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Oracle that answers every query with the same recordings
pub struct FixedOracle {
    results: Vec<String>,
    calls: AtomicUsize,
}

impl FixedOracle {
    pub fn new(results: &[&str]) -> Self {
        Self {
            results: results.iter().map(|r| r.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MusicSearchOracle for FixedOracle {
    async fn search_track(&self, _artist: &str, _song: &str) -> AppResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.results.clone())
    }

    fn name(&self) -> &'static str {
        "Fixed"
    }
}

/// Oracle whose backend is always down
pub struct UnavailableOracle;

#[async_trait]
impl MusicSearchOracle for UnavailableOracle {
    async fn search_track(&self, _artist: &str, _song: &str) -> AppResult<Vec<String>> {
        Err(AppError::ExternalServiceError(
            "Failed to connect to external service".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "Unavailable"
    }
}

/// History search that fails every call with a copy of `error`
pub struct FailingSearch {
    error: fn() -> AppError,
}

impl FailingSearch {
    pub fn transient() -> Self {
        Self {
            error: || AppError::RateLimitError("Too many requests".to_string()),
        }
    }

    pub fn fatal() -> Self {
        Self {
            error: || AppError::Unauthorized("Invalid credentials".to_string()),
        }
    }
}

#[async_trait]
impl RepostSearch for FailingSearch {
    async fn search(
        &self,
        _context: SearchContext,
        _query: &str,
        _lookback: Duration,
        _max_results: usize,
    ) -> AppResult<Vec<Submission>> {
        Err((self.error)())
    }
}
