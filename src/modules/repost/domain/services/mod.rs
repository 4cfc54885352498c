pub mod repost_detector;
