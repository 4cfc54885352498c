//! Text normalization shared by every comparison in the crate.
//!
//! Titles arrive with accented band names, full-width characters and stray
//! whitespace. Everything that gets compared goes through [`fold_diacritics`]
//! first so that "Mötley Crüe" and "Motley Crue" are the same string.

use unicode_normalization::UnicodeNormalization;

fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' |
             '\u{1DC0}'..='\u{1DFF}' | '\u{20D0}'..='\u{20FF}' |
             '\u{FE20}'..='\u{FE2F}')
}

/// Strip diacritics down to their base letters, keeping case and punctuation.
///
/// NFKD also folds compatibility forms (full-width letters, ligatures). Dashes
/// and typographic quotes survive untouched because the title grammar keys on
/// them.
pub fn fold_diacritics(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Collapse runs of whitespace into a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Key used for case-insensitive comparisons: folded, lower-cased, collapsed
pub fn comparison_key(text: &str) -> String {
    collapse_whitespace(&fold_diacritics(text).to_lowercase())
}

/// Case-insensitive substring test on comparison keys
pub fn contains_ignoring_case(haystack: &str, needle: &str) -> bool {
    let needle = comparison_key(needle);
    if needle.is_empty() {
        return false;
    }
    comparison_key(haystack).contains(&needle)
}

/// True when either string contains the other, ignoring case and accents.
///
/// An empty side never matches a non-empty one; two empty strings are equal.
pub fn contains_either_way(a: &str, b: &str) -> bool {
    let a = comparison_key(a);
    let b = comparison_key(b);
    if a.is_empty() || b.is_empty() {
        return a == b;
    }
    a.contains(&b) || b.contains(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_accents_and_keeps_case() {
        assert_eq!(fold_diacritics("Mötley Crüe"), "Motley Crue");
        assert_eq!(fold_diacritics("Sigur Rós"), "Sigur Ros");
        assert_eq!(fold_diacritics("Björk"), "Bjork");
    }

    #[test]
    fn test_fold_keeps_separators() {
        assert_eq!(fold_diacritics("Artist — Song"), "Artist — Song");
        assert_eq!(fold_diacritics("Artist – “Song”"), "Artist – “Song”");
    }

    #[test]
    fn test_fold_compatibility_forms() {
        assert_eq!(fold_diacritics("ＴＯＯＬ"), "TOOL");
    }

    #[test]
    fn test_fold_ascii_is_identity() {
        let title = "Between the Buried and Me - Alaska";
        assert_eq!(fold_diacritics(title), title);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Band \t --  Song \n"), "Band -- Song");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_comparison_key() {
        assert_eq!(comparison_key("  OPETH   Ghost  of Perdition "), "opeth ghost of perdition");
        assert_eq!(comparison_key("Mötley CRÜE"), "motley crue");
    }

    #[test]
    fn test_contains_either_way() {
        assert!(contains_either_way("X", "x"));
        assert!(contains_either_way("Opeth", "opeth official"));
        assert!(contains_either_way("the ocean collective", "The Ocean"));
        assert!(contains_either_way("Motley Crue", "Mötley Crüe"));
        assert!(!contains_either_way("X", "Z"));
    }

    #[test]
    fn test_contains_either_way_empty_sides() {
        assert!(!contains_either_way("", "Song"));
        assert!(!contains_either_way("Song", "   "));
        assert!(contains_either_way("", ""));
    }

    #[test]
    fn test_contains_ignoring_case() {
        assert!(contains_ignoring_case("Haken - Cockroach King (Official Video)", "cockroach king"));
        assert!(!contains_ignoring_case("Haken - Cockroach King", "Atlas"));
        assert!(!contains_ignoring_case("Haken", ""));
    }
}
