// Bounded contexts, leaves first
pub mod submission;
pub mod title;
pub mod link;
pub mod validation;
pub mod repost;
pub mod moderation;
