//! Reconciles what a title says with what the linked media says.

use crate::modules::link::LinkGuess;
use crate::modules::title::TitleGuess;
use crate::modules::validation::domain::ports::MusicSearchOracle;
use crate::modules::validation::domain::value_objects::{Correction, MatchVerdict};
use crate::shared::utils::text::{contains_either_way, contains_ignoring_case};
use crate::shared::utils::LogContext;
use serde::Serialize;
use std::sync::Arc;
use strsim::jaro_winkler;

/// Final verdict plus the correction attempt that produced it, if one ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub verdict: MatchVerdict,
    pub correction: Option<Correction>,
}

pub struct CrossValidator {
    oracle: Option<Arc<dyn MusicSearchOracle>>,
}

impl CrossValidator {
    /// Validator that asks `oracle` to corroborate ambiguous guesses
    pub fn new(oracle: Arc<dyn MusicSearchOracle>) -> Self {
        Self {
            oracle: Some(oracle),
        }
    }

    /// Validator that never corrects
    pub fn without_correction() -> Self {
        Self { oracle: None }
    }

    /// Pure reconciliation of a title guess with a link guess.
    ///
    /// `raw_media_title` is the provider's combined title; a failing axis gets
    /// a second chance as a literal substring of it.
    pub fn validate(
        post: &TitleGuess,
        link: Option<&LinkGuess>,
        raw_media_title: Option<&str>,
    ) -> MatchVerdict {
        match post.song.as_deref() {
            Some(song) if post.is_complete() => {
                Self::check_pair(&post.artist, song, link, raw_media_title)
            }
            _ => MatchVerdict::BadTitle,
        }
    }

    fn check_pair(
        artist: &str,
        song: &str,
        link: Option<&LinkGuess>,
        raw_media_title: Option<&str>,
    ) -> MatchVerdict {
        let Some(link) = link else {
            return MatchVerdict::Match;
        };

        match (link.artist.as_deref(), link.song.as_deref()) {
            // Aggregator channel: only the song can be compared
            (None, Some(link_song)) => {
                if contains_either_way(link_song, song) {
                    MatchVerdict::Match
                } else {
                    MatchVerdict::AmbiguousSong
                }
            }
            // Unsplit media title, carried in the artist slot
            (Some(video_title), None) => {
                if !contains_ignoring_case(video_title, artist) {
                    MatchVerdict::AmbiguousArtist
                } else if !contains_ignoring_case(video_title, song) {
                    MatchVerdict::AmbiguousSong
                } else {
                    MatchVerdict::Match
                }
            }
            (Some(link_artist), Some(link_song)) => {
                let in_raw_title = |text: &str| {
                    raw_media_title
                        .map(|raw| contains_ignoring_case(raw, text))
                        .unwrap_or(false)
                };
                let artist_ok = contains_either_way(link_artist, artist) || in_raw_title(artist);
                let song_ok = contains_either_way(link_song, song) || in_raw_title(song);

                match (artist_ok, song_ok) {
                    (true, true) => MatchVerdict::Match,
                    (false, _) => MatchVerdict::AmbiguousArtist,
                    (true, false) => MatchVerdict::AmbiguousSong,
                }
            }
            (None, None) => MatchVerdict::Match,
        }
    }

    /// Validate, then try to rescue an ambiguous verdict through the oracle
    pub async fn validate_with_correction(
        &self,
        post: &TitleGuess,
        link: Option<&LinkGuess>,
        raw_media_title: Option<&str>,
    ) -> ValidationOutcome {
        let verdict = Self::validate(post, link, raw_media_title);
        if !verdict.is_ambiguous() {
            return ValidationOutcome {
                verdict,
                correction: None,
            };
        }

        log::info!(
            "{}: \"{}\" does not match link {:?} (media title {:?})",
            verdict,
            post,
            link,
            raw_media_title
        );

        let correction = self.correct(post, link, raw_media_title).await;
        let verdict = if correction.is_corroborated() {
            MatchVerdict::Match
        } else {
            verdict
        };

        ValidationOutcome {
            verdict,
            correction: Some(correction),
        }
    }

    /// Ask the oracle for the post's (artist, song) and re-run the pair check
    /// with each result in place of the post. Never fails.
    pub async fn correct(
        &self,
        post: &TitleGuess,
        link: Option<&LinkGuess>,
        raw_media_title: Option<&str>,
    ) -> Correction {
        let Some(oracle) = self.oracle.as_ref() else {
            return Correction::Disabled;
        };
        let song = post.song.as_deref().unwrap_or_default();

        let results = match oracle.search_track(&post.artist, song).await {
            Ok(results) => results,
            Err(e) => {
                LogContext::error_with_context(&e, &format!("{} lookup failed", oracle.name()));
                return Correction::OracleUnavailable(e.to_string());
            }
        };
        LogContext::search_operation(&post.to_string(), Some(oracle.name()), Some(results.len()));

        for result in Self::rank_results(post, &results) {
            let Some((candidate_artist, candidate_song)) = result.split_once(" - ") else {
                continue;
            };
            let verdict = Self::check_pair(
                candidate_artist.trim(),
                candidate_song.trim(),
                link,
                raw_media_title,
            );
            if verdict == MatchVerdict::Match {
                log::info!("{} corroborated \"{}\" as \"{}\"", oracle.name(), post, result);
                return Correction::Corroborated(result.clone());
            }
        }

        Correction::NotCorroborated
    }

    /// Closest results first, ties keeping the oracle's order
    fn rank_results<'a>(post: &TitleGuess, results: &'a [String]) -> Vec<&'a String> {
        let target = post.to_string().to_lowercase();
        let mut ranked: Vec<(&String, f64)> = results
            .iter()
            .map(|result| (result, jaro_winkler(&target, &result.to_lowercase())))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.into_iter().map(|(result, _)| result).collect()
    }
}
