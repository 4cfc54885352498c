//! Individual stages of the title grammar.
//!
//! Pre-split stages rewrite the whole title, the separator stage splits it
//! into artist and remainder, and noise cutters each propose a position where
//! the song name ends. The earliest proposed cut wins.

use crate::shared::utils::text::fold_diacritics;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LEADING_TAG: Regex =
        Regex::new(r"^[()\[\]{}|][^()\[\]{}|]*[()\[\]{}|][\s\W]*").unwrap();
    static ref LEADING_LABEL: Regex = Regex::new(r#"^[^:\-–—“"]+?:\s+"#).unwrap();
    static ref SPACED_SEPARATOR: Regex = Regex::new(r"(?s)^(.*?)\s+(?:-{1,2}|—|–)\s+(.*)$").unwrap();
    static ref LOOSE_SEPARATOR: Regex = Regex::new(r"(?s)^(.*?)\s?(?:-{1,2}|—|–)\s?(.*)$").unwrap();
    static ref QUOTE_BOUNDARY: Regex = Regex::new(r"(?s)^(.+?)\s*“(.*)$").unwrap();
}

/// Rewrite applied to the whole title before it is split
pub trait TitleTransformation: Send + Sync {
    fn transform(&self, title: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Proposes the byte offset in the remainder where the song name ends.
///
/// Offsets of 0 are never proposed: a remainder that opens with a bracket or
/// quote still carries the song.
pub trait NoiseCut: Send + Sync {
    fn find_cut(&self, remainder: &str) -> Option<usize>;
    fn name(&self) -> &'static str;
}

/// Strips diacritics so accented and plain spellings parse identically
#[derive(Debug, Clone)]
pub struct FoldStage;

impl TitleTransformation for FoldStage {
    fn transform(&self, title: &str) -> String {
        fold_diacritics(title)
    }

    fn name(&self) -> &'static str {
        "Fold"
    }
}

/// Drops a leading tag such as `[NEW]`, `(Premiere)` or `|OC|`
#[derive(Debug, Clone)]
pub struct LeadingTagStage;

impl TitleTransformation for LeadingTagStage {
    fn transform(&self, title: &str) -> String {
        match LEADING_TAG.find(title) {
            Some(tag) if !title[tag.end()..].trim().is_empty() => title[tag.end()..].to_string(),
            _ => title.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "LeadingTag"
    }
}

/// Drops a `LABEL: ` prefix when the colon comes before the first separator
#[derive(Debug, Clone)]
pub struct LeadingLabelStage;

impl TitleTransformation for LeadingLabelStage {
    fn transform(&self, title: &str) -> String {
        match LEADING_LABEL.find(title) {
            Some(label) if SeparatorStage.split(&title[label.end()..]).is_some() => {
                title[label.end()..].to_string()
            }
            _ => title.to_string(),
        }
    }

    fn name(&self) -> &'static str {
        "LeadingLabel"
    }
}

/// Splits `artist SEP remainder`.
///
/// Spaced dashes win over unspaced ones, which win over a smart-quote
/// boundary (`Artist “Song”`). An opening quote on the remainder is consumed.
#[derive(Debug, Clone)]
pub struct SeparatorStage;

fn capture_pair<'t>(pattern: &Regex, text: &'t str) -> Option<(&'t str, &'t str)> {
    let captures = pattern.captures(text)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

impl SeparatorStage {
    pub fn split(&self, title: &str) -> Option<(String, String)> {
        let (artist, remainder) = match capture_pair(&SPACED_SEPARATOR, title)
            .or_else(|| capture_pair(&LOOSE_SEPARATOR, title))
        {
            Some((artist, remainder)) => {
                let remainder = remainder.trim_start();
                let remainder = remainder
                    .strip_prefix('"')
                    .or_else(|| remainder.strip_prefix('“'))
                    .unwrap_or(remainder);
                (artist, remainder)
            }
            None => capture_pair(&QUOTE_BOUNDARY, title)?,
        };

        Some((artist.to_string(), remainder.to_string()))
    }

    pub fn name(&self) -> &'static str {
        "Separator"
    }
}

/// A closing straight or smart quote ends the song
#[derive(Debug, Clone)]
pub struct QuoteCut;

impl NoiseCut for QuoteCut {
    fn find_cut(&self, remainder: &str) -> Option<usize> {
        remainder
            .char_indices()
            .find(|(i, c)| *i > 0 && matches!(c, '"' | '”'))
            .map(|(i, _)| i)
    }

    fn name(&self) -> &'static str {
        "QuoteCut"
    }
}

/// `//`, `\\`, `||`, or a `|...|` pair
#[derive(Debug, Clone)]
pub struct DelimiterCut;

impl NoiseCut for DelimiterCut {
    fn find_cut(&self, remainder: &str) -> Option<usize> {
        let doubled = ["//", "\\\\", "||"]
            .iter()
            .filter_map(|delimiter| {
                remainder
                    .match_indices(delimiter)
                    .map(|(i, _)| i)
                    .find(|&i| i > 0)
            })
            .min();

        let pipe_pair = remainder
            .match_indices('|')
            .map(|(i, _)| i)
            .find(|&i| i > 0 && remainder[i + 1..].contains('|'));

        doubled.into_iter().chain(pipe_pair).min()
    }

    fn name(&self) -> &'static str {
        "DelimiterCut"
    }
}

/// An opening bracket that is never closed by a trailing `)`.
///
/// `Song [Official Video]` loses the bracket, `Song (Part II)` keeps it.
#[derive(Debug, Clone)]
pub struct UnclosedBracketCut;

impl NoiseCut for UnclosedBracketCut {
    fn find_cut(&self, remainder: &str) -> Option<usize> {
        let trimmed = remainder.trim_end();
        if trimmed.ends_with(')') {
            return None;
        }
        trimmed
            .char_indices()
            .find(|(i, c)| {
                *i > 0 && matches!(c, '(' | '[' | '{') && i + c.len_utf8() < trimmed.len()
            })
            .map(|(i, _)| i)
    }

    fn name(&self) -> &'static str {
        "UnclosedBracketCut"
    }
}

/// A delimiter followed somewhere later by a noise keyword or a year.
///
/// Keywords match as word prefixes, case-insensitively, so `premiere` also
/// catches `Premieres`.
#[derive(Debug, Clone)]
pub struct KeywordCut {
    delimiters: Vec<char>,
    keywords: Option<Regex>,
}

impl KeywordCut {
    pub fn new(
        keywords: &[String],
        delimiters: &[char],
        match_years: bool,
    ) -> Result<Self, regex::Error> {
        let mut alternatives: Vec<String> = keywords
            .iter()
            .map(|keyword| keyword.trim())
            .filter(|keyword| !keyword.is_empty())
            .map(|keyword| {
                keyword
                    .split_whitespace()
                    .map(regex::escape)
                    .collect::<Vec<String>>()
                    .join(r"\s+")
            })
            .collect();
        if match_years {
            alternatives.push(r"\d{4}\b".to_string());
        }

        let keywords = if alternatives.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(r"(?i)\b(?:{})", alternatives.join("|")))?)
        };

        Ok(Self {
            delimiters: delimiters.to_vec(),
            keywords,
        })
    }
}

impl NoiseCut for KeywordCut {
    fn find_cut(&self, remainder: &str) -> Option<usize> {
        let last_keyword = self
            .keywords
            .as_ref()?
            .find_iter(remainder)
            .map(|m| m.start())
            .last()?;

        remainder
            .char_indices()
            .find(|(i, c)| *i > 0 && *i < last_keyword && self.delimiters.contains(c))
            .map(|(i, _)| i)
    }

    fn name(&self) -> &'static str {
        "KeywordCut"
    }
}
