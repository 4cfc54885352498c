pub mod domain;

// Re-exports for easy external access
pub use domain::services::link_extractor::LinkExtractor;
pub use domain::value_objects::LinkGuess;
