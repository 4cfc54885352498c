use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Port for an external music catalogue used to corroborate a title guess.
///
/// Results are ordered best-first, each formatted `"artist - song"`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MusicSearchOracle: Send + Sync {
    async fn search_track(&self, artist: &str, song: &str) -> AppResult<Vec<String>>;

    /// Name used in logs
    fn name(&self) -> &'static str;
}
