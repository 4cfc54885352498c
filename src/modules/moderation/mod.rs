pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::service::ModerationService;
pub use domain::config::{ModerationConfig, ModerationConfigBuilder};
pub use domain::value_objects::{ModerationReport, Violation};
