mod submission_log;

pub use submission_log::SubmissionLog;
