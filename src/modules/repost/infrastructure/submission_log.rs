use crate::modules::repost::domain::ports::{RepostSearch, SearchContext};
use crate::modules::submission::{CanonicalUrl, Submission};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::text::comparison_key;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct LogState {
    entries: Vec<Submission>,
    by_id: HashMap<String, usize>,
    /// Keyed by canonical URL string
    by_url: HashMap<String, Vec<usize>>,
}

/// In-memory submission history.
///
/// Entries are only ever appended; status changes update the stored snapshot
/// in place. Searches are coarse (URL index hit or artist substring) and leave
/// the exact matching to the detector.
#[derive(Default)]
pub struct SubmissionLog {
    state: RwLock<LogState>,
}

impl SubmissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submission. Returns false when the id is already present.
    pub async fn record(&self, submission: Submission) -> bool {
        let mut state = self.state.write().await;
        if state.by_id.contains_key(&submission.id) {
            log::debug!("Submission {} already recorded", submission.id);
            return false;
        }

        let index = state.entries.len();
        state.by_id.insert(submission.id.clone(), index);
        state
            .by_url
            .entry(submission.canonical_url().to_string())
            .or_default()
            .push(index);
        state.entries.push(submission);
        true
    }

    pub async fn mark_removed(&self, id: &str) -> AppResult<()> {
        self.update(id, |submission| submission.removed = true).await
    }

    pub async fn mark_archived(&self, id: &str) -> AppResult<()> {
        self.update(id, |submission| submission.archived = true).await
    }

    pub async fn get(&self, id: &str) -> Option<Submission> {
        let state = self.state.read().await;
        state
            .by_id
            .get(id)
            .map(|&index| state.entries[index].clone())
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn update<F>(&self, id: &str, apply: F) -> AppResult<()>
    where
        F: FnOnce(&mut Submission),
    {
        let mut state = self.state.write().await;
        let index = *state
            .by_id
            .get(id)
            .ok_or_else(|| AppError::NotFound(format!("Submission {} not recorded", id)))?;
        apply(&mut state.entries[index]);
        Ok(())
    }
}

/// Artist half of an `artist -- song` key, or the whole key when unsplit
fn artist_part(query: &str) -> &str {
    query
        .split_once(" -- ")
        .map(|(artist, _)| artist)
        .unwrap_or(query)
}

#[async_trait]
impl RepostSearch for SubmissionLog {
    async fn search(
        &self,
        context: SearchContext,
        query: &str,
        lookback: Duration,
        max_results: usize,
    ) -> AppResult<Vec<Submission>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query must not be empty".to_string(),
            ));
        }

        let cutoff = Utc::now() - lookback;
        let state = self.state.read().await;

        let mut hits: Vec<&Submission> = match context {
            SearchContext::Url => {
                // Accept raw links as well as already-canonical keys
                let raw_key = CanonicalUrl::from_url(query);
                state
                    .by_url
                    .get(query.trim())
                    .or_else(|| state.by_url.get(raw_key.as_str()))
                    .map(|indexes| indexes.iter().map(|&i| &state.entries[i]).collect())
                    .unwrap_or_default()
            }
            SearchContext::Title => {
                let needle = comparison_key(artist_part(query));
                state
                    .entries
                    .iter()
                    .filter(|submission| comparison_key(&submission.title).contains(&needle))
                    .collect()
            }
        };

        hits.retain(|submission| submission.created_at >= cutoff);
        hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(hits.into_iter().take(max_results).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, title: &str, url: &str, days_ago: i64) -> Submission {
        Submission::link(
            id,
            title,
            url,
            "youtube.com",
            "poster",
            Utc::now() - Duration::days(days_ago),
        )
    }

    #[tokio::test]
    async fn test_record_rejects_duplicate_ids() {
        let log = SubmissionLog::new();
        assert!(log.is_empty().await);
        assert!(log.record(post("a", "Band - Song", "https://youtu.be/abcdefghijk", 1)).await);
        assert!(!log.record(post("a", "Other - Thing", "https://youtu.be/bbbbbbbbbbb", 1)).await);
        assert_eq!(log.len().await, 1);
        assert_eq!(log.get("a").await.map(|s| s.title), Some("Band - Song".to_string()));
    }

    #[tokio::test]
    async fn test_url_search_uses_canonical_form_newest_first() {
        let log = SubmissionLog::new();
        log.record(post("old", "A - B", "https://youtu.be/abcdefghijk", 30)).await;
        log.record(post("new", "A - B", "https://www.youtube.com/watch?v=abcdefghijk&t=4", 2))
            .await;
        log.record(post("other", "A - B", "https://youtu.be/zzzzzzzzzzz", 1)).await;

        let hits = log
            .search(SearchContext::Url, "youtube:abcdefghijk", Duration::days(180), 10)
            .await
            .unwrap();
        let ids: Vec<&str> = hits.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[tokio::test]
    async fn test_title_search_respects_window_and_cap() {
        let log = SubmissionLog::new();
        log.record(post("ancient", "Band - Song", "https://a.com/1", 400)).await;
        log.record(post("one", "Band - Song", "https://a.com/2", 10)).await;
        log.record(post("two", "BAND - Other Song", "https://a.com/3", 5)).await;
        log.record(post("three", "Unrelated - Song", "https://a.com/4", 3)).await;

        let hits = log
            .search(SearchContext::Title, "band -- song", Duration::days(180), 1)
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "two");

        let hits = log
            .search(SearchContext::Title, "band -- song", Duration::days(180), 10)
            .await
            .unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_status_updates() {
        let log = SubmissionLog::new();
        log.record(post("a", "Band - Song", "https://a.com/1", 1)).await;

        log.mark_removed("a").await.unwrap();
        log.mark_archived("a").await.unwrap();
        let stored = log.get("a").await.unwrap();
        assert!(stored.removed && stored.archived);

        assert!(matches!(
            log.mark_removed("missing").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected() {
        let log = SubmissionLog::new();
        let result = log
            .search(SearchContext::Title, "  ", Duration::days(1), 5)
            .await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
