pub mod domain;

// Re-exports for easy external access
pub use domain::services::title_parser::{TitleGrammar, TitleParser};
pub use domain::value_objects::TitleGuess;
