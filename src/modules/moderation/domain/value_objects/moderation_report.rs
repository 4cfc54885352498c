use super::Violation;
use crate::modules::link::LinkGuess;
use crate::modules::repost::RepostOutcome;
use crate::modules::title::TitleGuess;
use crate::modules::validation::{CatalogPresence, Correction, MatchVerdict};
use serde::Serialize;

/// Everything the pipeline concluded about one submission.
///
/// Fields stay `None` for stages that never ran, e.g. no title guess for a
/// self post and no repost outcome after a bad title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModerationReport {
    pub submission_id: String,
    pub verdict: Option<MatchVerdict>,
    pub title_guess: Option<TitleGuess>,
    pub link_guess: Option<LinkGuess>,
    pub correction: Option<Correction>,
    pub catalog: Option<CatalogPresence>,
    pub violations: Vec<Violation>,
    pub repost: Option<RepostOutcome>,
}

impl ModerationReport {
    pub fn new(submission_id: impl Into<String>) -> Self {
        Self {
            submission_id: submission_id.into(),
            verdict: None,
            title_guess: None,
            link_guess: None,
            correction: None,
            catalog: None,
            violations: Vec::new(),
            repost: None,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_violation(&self, violation: &Violation) -> bool {
        self.violations.contains(violation)
    }

    /// Report reasons, one per violation, in detection order
    pub fn reasons(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }

    /// One-line description for the log
    pub fn summary(&self) -> String {
        let verdict = self
            .verdict
            .map(|v| v.display_name())
            .unwrap_or("Unchecked");
        if self.is_clean() {
            format!("{}, clean", verdict)
        } else {
            format!("{}, {}", verdict, self.reasons().join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let mut report = ModerationReport::new("abc");
        assert_eq!(report.summary(), "Unchecked, clean");

        report.verdict = Some(MatchVerdict::AlbumStream);
        report.violations.push(Violation::AlbumStream);
        assert!(!report.is_clean());
        assert!(report.has_violation(&Violation::AlbumStream));
        assert_eq!(report.summary(), "Album Stream, Full Album Stream");
    }
}
