//! Title/link cross-checking and repost detection for a music community.
//!
//! [`ModerationService`] is the entry point: feed it one [`Submission`] at a
//! time and act on the [`ModerationReport`] it returns.

pub mod modules;
pub mod shared;

pub use modules::moderation::{ModerationConfig, ModerationReport, ModerationService, Violation};
pub use modules::submission::Submission;
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::init_logger;
