//! Stages keyed on the marker words of bilingual abstracts.
//!
//! `strip_abstract_marker` and `strip_second_language` match the same words
//! with different scope: the former only removes the marker when the text
//! starts with it, the latter drops everything from the first marker on.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Stage, Transform};
use crate::constants::markers::ABSTRACT_MARKERS;

static LEADING_MARKER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("(?i)^(?:{})+", ABSTRACT_MARKERS.join("|"))).unwrap());

static KEYWORD_TRAILER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)(?:kata kunci|keywords|keyword).*").unwrap());

static SECOND_LANGUAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("(?is)(?:{}).*", ABSTRACT_MARKERS.join("|"))).unwrap());

/// Removes a leading run of "Abstract"/"Abstrak" markers
pub struct AbstractMarkerStripper;

impl Transform for AbstractMarkerStripper {
    fn name(&self) -> &str {
        Stage::StripAbstractMarker.as_str()
    }

    fn apply(&self, text: &str) -> String {
        LEADING_MARKER_PATTERN.replace(text, "").into_owned()
    }
}

/// Removes the keyword trailer ("Kata kunci"/"Keywords") through the end of the text
pub struct KeywordTrailerStripper;

impl Transform for KeywordTrailerStripper {
    fn name(&self) -> &str {
        Stage::StripKeywordTrailer.as_str()
    }

    fn apply(&self, text: &str) -> String {
        KEYWORD_TRAILER_PATTERN.replace(text, "").into_owned()
    }
}

/// Removes everything from the first "Abstract"/"Abstrak" marker on, keeping
/// the language variant that comes first
pub struct SecondLanguageStripper;

impl Transform for SecondLanguageStripper {
    fn name(&self) -> &str {
        Stage::StripSecondLanguage.as_str()
    }

    fn apply(&self, text: &str) -> String {
        SECOND_LANGUAGE_PATTERN.replace(text, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_abstract_marker() {
        let t = AbstractMarkerStripper;
        assert_eq!(t.transform(Some("ABSTRAK Penelitian ini")), " Penelitian ini");
        assert_eq!(t.transform(Some("AbstractAbstrak text")), " text");
        assert_eq!(t.transform(Some("abstract: text")), ": text");
        // Only anchored at the start
        assert_eq!(
            t.transform(Some("This abstract is fine")),
            "This abstract is fine"
        );
    }

    #[test]
    fn test_strip_keyword_trailer() {
        let t = KeywordTrailerStripper;
        assert_eq!(
            t.transform(Some("finding X is true. Keywords: a, b, c")),
            "finding X is true. "
        );
        assert_eq!(
            t.transform(Some("hasil baik.\nKATA KUNCI: gizi,\nibu hamil")),
            "hasil baik.\n"
        );
        assert_eq!(t.transform(Some("Keyword: x")), "");
        assert_eq!(t.transform(Some("nothing to cut")), "nothing to cut");
    }

    #[test]
    fn test_strip_second_language() {
        let t = SecondLanguageStripper;
        assert_eq!(
            t.transform(Some("Penelitian ini.\nAbstract\nThis study.")),
            "Penelitian ini.\n"
        );
        assert_eq!(t.transform(Some("ABSTRAK whole text")), "");
        assert_eq!(t.transform(Some("single language")), "single language");
    }

    #[test]
    fn test_every_marker_word_is_recognised() {
        for marker in ABSTRACT_MARKERS {
            let text = format!("{} isi", marker.to_uppercase());
            assert_eq!(AbstractMarkerStripper.transform(Some(text.as_str())), " isi");
            assert_eq!(SecondLanguageStripper.transform(Some(text.as_str())), "");
        }
    }

    #[test]
    fn test_marker_scopes_differ() {
        let text = "Intro text ABSTRAK isi";
        assert_eq!(AbstractMarkerStripper.transform(Some(text)), text);
        assert_eq!(SecondLanguageStripper.transform(Some(text)), "Intro text ");
    }
}
