mod repost_outcome;

pub use repost_outcome::{MatchedOn, RepostCandidate, RepostOutcome};
