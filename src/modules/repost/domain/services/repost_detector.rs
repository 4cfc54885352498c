use crate::modules::repost::domain::ports::{RepostSearch, SearchContext};
use crate::modules::repost::domain::value_objects::{MatchedOn, RepostCandidate, RepostOutcome};
use crate::modules::submission::Submission;
use crate::modules::title::TitleParser;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::text::contains_either_way;
use crate::shared::utils::LogContext;
use chrono::Duration;
use std::sync::Arc;

/// Looks for an earlier, still-live submission of the same song.
///
/// The URL pass runs first; only when it finds nothing is the title pass
/// queried. Within a pass the first hit in newest-first order wins.
pub struct RepostDetector {
    search: Arc<dyn RepostSearch>,
    title_parser: Arc<TitleParser>,
}

impl RepostDetector {
    pub fn new(search: Arc<dyn RepostSearch>, title_parser: Arc<TitleParser>) -> Self {
        Self {
            search,
            title_parser,
        }
    }

    /// Transient search failures come back as `Skipped`; anything else is an error
    pub async fn find_repost(
        &self,
        submission: &Submission,
        lookback: Duration,
        max_results: usize,
    ) -> AppResult<RepostOutcome> {
        match self.find_candidate(submission, lookback, max_results).await {
            Ok(Some(candidate)) => Ok(RepostOutcome::Repost(candidate)),
            Ok(None) => Ok(RepostOutcome::Original),
            Err(e) if e.is_transient() => {
                log::warn!(
                    "Repost search unavailable for {}, skipping: {}",
                    submission.id,
                    e
                );
                Ok(RepostOutcome::Skipped {
                    reason: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn find_candidate(
        &self,
        submission: &Submission,
        lookback: Duration,
        max_results: usize,
    ) -> Result<Option<RepostCandidate>, AppError> {
        let url = submission.canonical_url();
        let by_url = self
            .eligible(SearchContext::Url, url.as_str(), submission, lookback, max_results)
            .await?;
        if let Some(original) = by_url
            .into_iter()
            .find(|candidate| candidate.canonical_url() == url)
        {
            log::info!(
                "Url match of \"{}\" and \"{}\" ({})",
                submission.url,
                original.url,
                original.id
            );
            return Ok(Some(RepostCandidate {
                original,
                matched_on: MatchedOn::Url,
            }));
        }

        let guess = self.title_parser.parse(&submission.title);
        if !guess.is_complete() {
            return Ok(None);
        }
        let title_key = guess.comparison_key();

        let by_title = self
            .eligible(SearchContext::Title, &title_key, submission, lookback, max_results)
            .await?;
        let matched = by_title.into_iter().find(|candidate| {
            let candidate_guess = self.title_parser.parse(&candidate.title);
            candidate_guess.is_complete()
                && contains_either_way(&title_key, &candidate_guess.comparison_key())
        });

        Ok(matched.map(|original| {
            log::info!(
                "Title match of \"{}\" and \"{}\" ({})",
                submission.title,
                original.title,
                original.id
            );
            RepostCandidate {
                original,
                matched_on: MatchedOn::Title,
            }
        }))
    }

    /// Search results that may legitimately be an original of `submission`
    async fn eligible(
        &self,
        context: SearchContext,
        query: &str,
        submission: &Submission,
        lookback: Duration,
        max_results: usize,
    ) -> AppResult<Vec<Submission>> {
        let results = self
            .search
            .search(context, query, lookback, max_results)
            .await?;
        LogContext::search_operation(query, Some(&context.to_string()), Some(results.len()));

        Ok(results
            .into_iter()
            .take(max_results)
            .filter(|candidate| {
                candidate.id != submission.id
                    && candidate.is_live()
                    && candidate.is_strictly_older_than(submission)
                    && candidate.is_within(lookback, submission.created_at)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::repost::domain::ports::MockRepostSearch;
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::predicate::eq;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap()
    }

    fn post(id: &str, title: &str, url: &str, day: u32) -> Submission {
        Submission::link(id, title, url, "youtube.com", "poster", at(day))
    }

    fn detector(search: MockRepostSearch) -> RepostDetector {
        RepostDetector::new(
            Arc::new(search),
            Arc::new(TitleParser::for_submissions().unwrap()),
        )
    }

    #[tokio::test]
    async fn test_url_hit_short_circuits_title_pass() {
        let original = post("old", "Haken - 1985", "https://youtu.be/abcdefghijk", 1);
        let new = post(
            "new",
            "HAKEN - 1985 (Official)",
            "https://www.youtube.com/watch?v=abcdefghijk",
            20,
        );

        let mut search = MockRepostSearch::new();
        let found = original.clone();
        search
            .expect_search()
            .with(
                eq(SearchContext::Url),
                eq("youtube:abcdefghijk"),
                mockall::predicate::always(),
                eq(25usize),
            )
            .times(1)
            .returning(move |_, _, _, _| Ok(vec![found.clone()]));
        search
            .expect_search()
            .with(
                eq(SearchContext::Title),
                mockall::predicate::always(),
                mockall::predicate::always(),
                mockall::predicate::always(),
            )
            .never();

        let outcome = detector(search)
            .find_repost(&new, Duration::days(180), 25)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            RepostOutcome::Repost(RepostCandidate {
                original,
                matched_on: MatchedOn::Url,
            })
        );
    }

    #[tokio::test]
    async fn test_title_pass_after_url_miss() {
        let original = post("old", "Band -- Song", "https://youtu.be/aaaaaaaaaaa", 1);
        let new = post("new", "Band -- Song (Live)", "https://youtu.be/bbbbbbbbbbb", 2);

        let mut search = MockRepostSearch::new();
        search
            .expect_search()
            .with(
                eq(SearchContext::Url),
                mockall::predicate::always(),
                mockall::predicate::always(),
                mockall::predicate::always(),
            )
            .returning(|_, _, _, _| Ok(vec![]));
        let found = original.clone();
        search
            .expect_search()
            .with(
                eq(SearchContext::Title),
                eq("band -- song"),
                mockall::predicate::always(),
                mockall::predicate::always(),
            )
            .returning(move |_, _, _, _| Ok(vec![found.clone()]));

        let outcome = detector(search)
            .find_repost(&new, Duration::days(180), 25)
            .await
            .unwrap();

        assert_eq!(outcome.candidate().map(|c| c.matched_on), Some(MatchedOn::Title));
        assert_eq!(outcome.candidate().map(|c| c.original.id.as_str()), Some("old"));
    }

    #[tokio::test]
    async fn test_ineligible_candidates_are_ignored() {
        let new = post("new", "Band - Song", "https://youtu.be/abcdefghijk", 20);

        let mut archived = post("archived", "Band - Song", "https://youtu.be/abcdefghijk", 10);
        archived.archived = true;
        let mut removed = post("removed", "Band - Song", "https://youtu.be/abcdefghijk", 11);
        removed.removed = true;
        let newer = post("newer", "Band - Song", "https://youtu.be/abcdefghijk", 25);
        let same_time = post("same", "Band - Song", "https://youtu.be/abcdefghijk", 20);
        let itself = new.clone();
        let mut too_old = post("too-old", "Band - Song", "https://youtu.be/abcdefghijk", 1);
        too_old.created_at = new.created_at - Duration::days(200);

        let candidates = vec![newer, same_time, itself, removed, archived, too_old];
        let mut search = MockRepostSearch::new();
        search
            .expect_search()
            .returning(move |_, _, _, _| Ok(candidates.clone()));

        let outcome = detector(search)
            .find_repost(&new, Duration::days(180), 25)
            .await
            .unwrap();

        assert_eq!(outcome, RepostOutcome::Original);
    }

    #[tokio::test]
    async fn test_transient_failure_skips() {
        let new = post("new", "Band - Song", "https://youtu.be/abcdefghijk", 20);
        let mut search = MockRepostSearch::new();
        search.expect_search().returning(|_, _, _, _| {
            Err(AppError::ExternalServiceError("search backend down".to_string()))
        });

        let outcome = detector(search)
            .find_repost(&new, Duration::days(180), 25)
            .await
            .unwrap();

        assert!(matches!(outcome, RepostOutcome::Skipped { .. }));
    }

    #[tokio::test]
    async fn test_non_transient_failure_propagates() {
        let new = post("new", "Band - Song", "https://youtu.be/abcdefghijk", 20);
        let mut search = MockRepostSearch::new();
        search
            .expect_search()
            .returning(|_, _, _, _| Err(AppError::InvalidInput("bad query".to_string())));

        let result = detector(search)
            .find_repost(&new, Duration::days(180), 25)
            .await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_unparsed_titles_never_title_match() {
        let new = post("new", "Band - Song", "https://youtu.be/bbbbbbbbbbb", 20);
        let unparsed = post("old", "band", "https://youtu.be/aaaaaaaaaaa", 10);

        let mut search = MockRepostSearch::new();
        search
            .expect_search()
            .returning(move |_, _, _, _| Ok(vec![unparsed.clone()]));

        let outcome = detector(search)
            .find_repost(&new, Duration::days(180), 25)
            .await
            .unwrap();

        assert_eq!(outcome, RepostOutcome::Original);
    }
}
