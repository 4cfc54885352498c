pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::ports::{RepostSearch, SearchContext};
pub use domain::services::repost_detector::RepostDetector;
pub use domain::value_objects::{MatchedOn, RepostCandidate, RepostOutcome};
pub use infrastructure::SubmissionLog;
