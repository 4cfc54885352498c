pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::ports::MusicSearchOracle;
pub use domain::services::catalog_check::CatalogCheck;
pub use domain::services::cross_validator::{CrossValidator, ValidationOutcome};
pub use domain::value_objects::{CatalogPresence, Correction, MatchVerdict};
pub use infrastructure::musicbrainz::{MusicBrainzConfig, MusicBrainzOracle};
