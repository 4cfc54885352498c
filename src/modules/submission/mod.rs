pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::entities::Submission;
pub use domain::services::submission_checks;
pub use domain::value_objects::{CanonicalUrl, LinkDomain, MediaMetadata};
pub use infrastructure::{decode_media_metadata, OEmbedPayload};
