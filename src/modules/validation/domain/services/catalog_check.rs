use crate::modules::title::TitleGuess;
use crate::modules::validation::domain::ports::MusicSearchOracle;
use crate::modules::validation::domain::value_objects::CatalogPresence;
use crate::shared::utils::text::contains_either_way;
use crate::shared::utils::LogContext;
use std::sync::Arc;

/// Looks the posted (artist, song) up in the music catalogue.
///
/// The oracle's query is loose, so a non-empty answer is not enough: some
/// result has to agree with the post on both artist and song.
pub struct CatalogCheck {
    oracle: Arc<dyn MusicSearchOracle>,
}

impl CatalogCheck {
    pub fn new(oracle: Arc<dyn MusicSearchOracle>) -> Self {
        Self { oracle }
    }

    pub async fn check(&self, post: &TitleGuess) -> CatalogPresence {
        let song = post.song.as_deref().unwrap_or_default();

        let results = match self.oracle.search_track(&post.artist, song).await {
            Ok(results) => results,
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    &format!("{} catalogue lookup failed", self.oracle.name()),
                );
                return CatalogPresence::Unknown(e.to_string());
            }
        };

        let listed = results.iter().find(|result| {
            result
                .split_once(" - ")
                .map(|(artist, title)| {
                    contains_either_way(artist, &post.artist) && contains_either_way(title, song)
                })
                .unwrap_or(false)
        });

        match listed {
            Some(result) => CatalogPresence::Listed(result.clone()),
            None => {
                log::info!("\"{}\" not found in {}", post, self.oracle.name());
                CatalogPresence::Unlisted
            }
        }
    }
}
