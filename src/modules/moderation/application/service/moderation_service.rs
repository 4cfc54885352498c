use crate::modules::link::LinkExtractor;
use crate::modules::moderation::domain::config::ModerationConfig;
use crate::modules::moderation::domain::value_objects::{ModerationReport, Violation};
use crate::modules::repost::{RepostDetector, RepostSearch};
use crate::modules::submission::{submission_checks, Submission};
use crate::modules::title::TitleParser;
use crate::modules::validation::{
    CatalogCheck, CatalogPresence, Correction, CrossValidator, MatchVerdict, MusicBrainzConfig,
    MusicBrainzOracle, MusicSearchOracle,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use std::sync::Arc;

/// Application service that runs every check for one submission
///
/// Stages run strictly in order and each collaborator call is awaited before
/// the next one starts. Best-effort stages (oracle correction, repost search)
/// degrade into the report instead of failing the review.
pub struct ModerationService {
    config: ModerationConfig,
    title_parser: Arc<TitleParser>,
    link_extractor: LinkExtractor,
    validator: CrossValidator,
    catalog_check: Option<CatalogCheck>,
    repost_detector: RepostDetector,
}

impl ModerationService {
    pub fn new(
        config: ModerationConfig,
        history: Arc<dyn RepostSearch>,
        oracle: Option<Arc<dyn MusicSearchOracle>>,
    ) -> AppResult<Self> {
        config.validate().map_err(AppError::ValidationError)?;

        let title_parser = Arc::new(TitleParser::for_submissions()?);
        let catalog_check = oracle
            .as_ref()
            .filter(|_| config.enable_catalog_check)
            .map(|oracle| CatalogCheck::new(Arc::clone(oracle)));
        let validator = match oracle {
            Some(oracle) if config.enable_typo_correction => CrossValidator::new(oracle),
            _ => CrossValidator::without_correction(),
        };

        Ok(Self {
            link_extractor: LinkExtractor::new()?,
            repost_detector: RepostDetector::new(history, Arc::clone(&title_parser)),
            title_parser,
            validator,
            catalog_check,
            config,
        })
    }

    /// Service backed by the MusicBrainz recording search
    pub fn with_musicbrainz(
        config: ModerationConfig,
        history: Arc<dyn RepostSearch>,
        musicbrainz: &MusicBrainzConfig,
    ) -> AppResult<Self> {
        let oracle: Arc<dyn MusicSearchOracle> = Arc::new(MusicBrainzOracle::new(musicbrainz)?);
        Self::new(config, history, Some(oracle))
    }

    pub fn config(&self) -> &ModerationConfig {
        &self.config
    }

    /// Review one submission.
    ///
    /// Only non-transient failures of the history search come back as errors.
    pub async fn review(&self, submission: &Submission) -> AppResult<ModerationReport> {
        let timer = TimedOperation::new("review_submission");

        let report = if submission.is_self {
            self.review_self_post(submission)
        } else {
            self.review_link_post(submission).await?
        };

        LogContext::review_outcome(&submission.id, &submission.domain, &report.summary());
        timer.finish_with_info(&submission.id);
        Ok(report)
    }

    fn review_self_post(&self, submission: &Submission) -> ModerationReport {
        let mut report = ModerationReport::new(&submission.id);
        if submission_checks::is_lazy_link_post(submission) {
            log::info!("Self post {} is a bare media link", submission.id);
            report.violations.push(Violation::LazyLinkPost);
        }
        report
    }

    async fn review_link_post(&self, submission: &Submission) -> AppResult<ModerationReport> {
        let mut report = ModerationReport::new(&submission.id);

        let domain = submission.link_domain();
        if !domain.is_supported() {
            log::info!("Link submission to {}", domain);
            report.verdict = Some(MatchVerdict::UnsupportedDomain);
            return Ok(report);
        }

        if submission_checks::is_album_stream(submission) {
            log::info!("Submission {} is an album stream", submission.id);
            report.verdict = Some(MatchVerdict::AlbumStream);
            report.violations.push(Violation::AlbumStream);
            return Ok(report);
        }

        let title_guess = self.title_parser.parse(&submission.title);
        if !title_guess.is_complete() {
            log::info!("Bad title format: \"{}\"", submission.title);
            report.verdict = Some(MatchVerdict::BadTitle);
            report.violations.push(Violation::BadTitle);
            report.title_guess = Some(title_guess);
            return Ok(report);
        }

        if self.config.enable_self_promotion_check
            && submission_checks::is_self_promotion(submission, &title_guess.artist)
        {
            report.violations.push(Violation::SelfPromotion);
        }

        let metadata = submission.metadata();
        let link_guess = self.link_extractor.extract(&domain, metadata);
        let raw_media_title = self.link_extractor.raw_media_title(metadata);

        let outcome = self
            .validator
            .validate_with_correction(&title_guess, link_guess.as_ref(), raw_media_title.as_deref())
            .await;
        let verdict = match (&link_guess, outcome.verdict) {
            (None, MatchVerdict::Match) => MatchVerdict::NoLinkInfo,
            (_, verdict) => verdict,
        };

        if verdict.is_ambiguous() {
            report
                .violations
                .push(Violation::PossibleTitleMismatch(verdict));
        }

        if let Some(catalog_check) = &self.catalog_check {
            let presence = match &outcome.correction {
                // Already found in the catalogue while correcting
                Some(Correction::Corroborated(result)) => CatalogPresence::Listed(result.clone()),
                _ => catalog_check.check(&title_guess).await,
            };
            if presence.is_unlisted() {
                report.violations.push(Violation::NotInCatalog);
            }
            report.catalog = Some(presence);
        }

        report.verdict = Some(verdict);
        report.correction = outcome.correction;
        report.title_guess = Some(title_guess);
        report.link_guess = link_guess;

        if self.config.enable_repost_check && verdict.allows_repost_check() {
            let repost = self
                .repost_detector
                .find_repost(
                    submission,
                    self.config.lookback(),
                    self.config.max_repost_results,
                )
                .await?;
            if let Some(candidate) = repost.candidate() {
                report.violations.push(Violation::Repost {
                    original_id: candidate.original.id.clone(),
                    matched_on: candidate.matched_on,
                });
            }
            report.repost = Some(repost);
        }

        Ok(report)
    }
}
