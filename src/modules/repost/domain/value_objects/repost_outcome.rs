use crate::modules::submission::Submission;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchedOn {
    Url,
    Title,
}

impl fmt::Display for MatchedOn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchedOn::Url => write!(f, "URL"),
            MatchedOn::Title => write!(f, "title"),
        }
    }
}

/// Earlier submission the one under review duplicates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepostCandidate {
    pub original: Submission,
    pub matched_on: MatchedOn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RepostOutcome {
    Repost(RepostCandidate),
    Original,
    /// History search was temporarily unavailable; nothing was decided
    Skipped { reason: String },
}

impl RepostOutcome {
    pub fn candidate(&self) -> Option<&RepostCandidate> {
        match self {
            RepostOutcome::Repost(candidate) => Some(candidate),
            _ => None,
        }
    }

    pub fn is_repost(&self) -> bool {
        self.candidate().is_some()
    }
}
