mod repost_search;

pub use repost_search::{RepostSearch, SearchContext};
#[cfg(test)]
pub use repost_search::MockRepostSearch;
