mod moderation_report;
mod violation;

pub use moderation_report::ModerationReport;
pub use violation::Violation;
