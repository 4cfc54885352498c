mod grammar;
pub mod stages;

pub use grammar::TitleGrammar;
pub use stages::{
    DelimiterCut, FoldStage, KeywordCut, LeadingLabelStage, LeadingTagStage, NoiseCut,
    QuoteCut, SeparatorStage, TitleTransformation, UnclosedBracketCut,
};

use crate::modules::title::domain::value_objects::TitleGuess;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::text::fold_diacritics;

/// Splits a title into (artist, song) through an ordered stage pipeline.
///
/// Uses the builder pattern so tests can assemble partial pipelines.
pub struct TitleParser {
    transformations: Vec<Box<dyn TitleTransformation>>,
    separator: SeparatorStage,
    cutters: Vec<Box<dyn NoiseCut>>,
}

impl TitleParser {
    /// Parser with no rewrites and no noise cutters
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
            separator: SeparatorStage,
            cutters: Vec::new(),
        }
    }

    /// Full pipeline for `grammar`
    pub fn from_grammar(grammar: &TitleGrammar) -> AppResult<Self> {
        let keyword_cut = KeywordCut::new(&grammar.keywords, &grammar.delimiters, grammar.match_years)
            .map_err(|e| {
                AppError::ValidationError(format!(
                    "Invalid {} title grammar: {}",
                    grammar.name, e
                ))
            })?;

        Ok(Self::new()
            .with_transformation(FoldStage)
            .with_transformation(LeadingTagStage)
            .with_transformation(LeadingLabelStage)
            .with_cut(QuoteCut)
            .with_cut(DelimiterCut)
            .with_cut(UnclosedBracketCut)
            .with_cut(keyword_cut))
    }

    pub fn for_submissions() -> AppResult<Self> {
        Self::from_grammar(&TitleGrammar::submission())
    }

    pub fn for_media() -> AppResult<Self> {
        Self::from_grammar(&TitleGrammar::media())
    }

    pub fn with_transformation(mut self, transformation: impl TitleTransformation + 'static) -> Self {
        self.transformations.push(Box::new(transformation));
        self
    }

    pub fn with_cut(mut self, cut: impl NoiseCut + 'static) -> Self {
        self.cutters.push(Box::new(cut));
        self
    }

    /// Parse a title. Never fails: an unsplittable title comes back as
    /// `{artist: <folded title>, song: None}`.
    pub fn parse(&self, title: &str) -> TitleGuess {
        let mut working = title.trim().to_string();
        for transformation in &self.transformations {
            working = transformation.transform(&working);
            log::trace!("After {}: '{}'", transformation.name(), working);
        }

        let Some((artist, remainder)) = self.separator.split(working.trim()) else {
            log::trace!("{} found no split in '{}'", self.separator.name(), working);
            return TitleGuess::unparsed(fold_diacritics(title).trim());
        };

        let cut = self
            .cutters
            .iter()
            .filter_map(|cutter| cutter.find_cut(&remainder).map(|at| (at, cutter.name())))
            .min_by_key(|(at, _)| *at);

        let song = match cut {
            Some((at, name)) => {
                log::trace!("{} cut '{}' at {}", name, remainder, at);
                &remainder[..at]
            }
            None => remainder.as_str(),
        };

        TitleGuess {
            artist: artist.trim().to_string(),
            song: Some(song.trim().to_string()),
        }
    }

    /// Number of rewrite stages plus cutters (separator not counted)
    pub fn stage_count(&self) -> usize {
        self.transformations.len() + self.cutters.len()
    }
}

impl Default for TitleParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> TitleParser {
        TitleParser::for_submissions().unwrap()
    }

    fn parsed(title: &str) -> (String, Option<String>) {
        let guess = parser().parse(title);
        (guess.artist, guess.song)
    }

    fn pair(artist: &str, song: &str) -> (String, Option<String>) {
        (artist.to_string(), Some(song.to_string()))
    }

    #[test]
    fn test_plain_artist_song() {
        assert_eq!(parsed("Artist - Song"), pair("Artist", "Song"));
        assert_eq!(parsed("  Artist   -   Song  "), pair("Artist", "Song"));
        assert_eq!(parsed("Band -- Song"), pair("Band", "Song"));
        assert_eq!(parsed("Band — Song"), pair("Band", "Song"));
    }

    #[test]
    fn test_label_and_noise() {
        assert_eq!(
            parsed("ALBUM REVIEW: Artist - Song (official)"),
            pair("Artist", "Song")
        );
        assert_eq!(parsed("Band -- Song (Live)"), pair("Band", "Song"));
    }

    #[test]
    fn test_unparseable_title() {
        assert_eq!(
            parsed("justarandomtitle"),
            ("justarandomtitle".to_string(), None)
        );
        assert_eq!(parsed("Björk"), ("Bjork".to_string(), None));
    }

    #[test]
    fn test_real_world_titles() {
        assert_eq!(
            parsed("[NEW] Haken - The Cockroach King [Official Video]"),
            pair("Haken", "The Cockroach King")
        );
        assert_eq!(
            parsed(r#"Leprous - "The Price" (Official Video)"#),
            pair("Leprous", "The Price")
        );
        assert_eq!(
            parsed("TesseracT - Juno (Official Music Video) | Kscope"),
            pair("TesseracT", "Juno")
        );
        assert_eq!(
            parsed("Plini - Electric Sunrise // FFO Intervals, Chon"),
            pair("Plini", "Electric Sunrise")
        );
        assert_eq!(
            parsed("Dream Theater - Pull Me Under (Part I)"),
            pair("Dream Theater", "Pull Me Under (Part I)")
        );
        assert_eq!(
            parsed("Mötley Crüe - Kickstart My Heart (1989)"),
            pair("Motley Crue", "Kickstart My Heart")
        );
        assert_eq!(
            parsed("Caligula's Horse “Salt”"),
            pair("Caligula's Horse", "Salt")
        );
    }

    #[test]
    fn test_any_four_digit_year_is_noise() {
        assert_eq!(parsed("Band - Song - 1889"), pair("Band", "Song"));
        assert_eq!(parsed("Band - Song (1650)"), pair("Band", "Song"));
        assert_eq!(parsed("Band - Song - 2019"), pair("Band", "Song"));
        assert_eq!(parsed("Band - Song - 123"), pair("Band", "Song - 123"));
    }

    #[test]
    fn test_missing_song_is_empty_not_none() {
        let guess = parser().parse("Artist - ");
        assert_eq!(guess.song.as_deref(), Some(""));
        assert!(!guess.is_complete());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = parser();
        for title in [
            "Artist - Song",
            "(Premiere) Band — Song [Official Video]",
            "justarandomtitle",
        ] {
            assert_eq!(parser.parse(title), parser.parse(title));
        }
    }

    #[test]
    fn test_empty_pipeline_only_splits() {
        let bare = TitleParser::new();
        assert_eq!(bare.stage_count(), 0);
        let guess = bare.parse("Band - Song (Live)");
        assert_eq!(guess, TitleGuess::new("Band", "Song (Live)"));
    }

    #[test]
    fn test_full_pipeline_stage_count() {
        assert_eq!(parser().stage_count(), 7);
    }

    #[test]
    fn test_media_grammar() {
        let media = TitleParser::for_media().unwrap();
        assert_eq!(
            media.parse("Haken - Atlas Stone (Official Audio)"),
            TitleGuess::new("Haken", "Atlas Stone")
        );
        // "tour" is submission noise only
        assert_eq!(
            media.parse("Band - Song (Tour Edit)"),
            TitleGuess::new("Band", "Song (Tour Edit)")
        );
    }
}
