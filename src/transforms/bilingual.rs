use once_cell::sync::Lazy;
use regex::Regex;

use super::{Stage, Transform};
use crate::constants::markers::{ABSTRACT_MARKERS, KEYWORD_MARKER};

static MARKER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&ABSTRACT_MARKERS.join("|")).unwrap());

// A line ends at a line break, or at a dot optionally followed by one whitespace
static LINE_SPLIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n|\.\s?").unwrap());

/// Extracts the single-language body of a bilingual abstract.
///
/// Both language variants are usually stored concatenated, each introduced by
/// a marker word, in no fixed order. The section after the **last** marker is
/// kept, lowercased, with its keyword trailer removed. When the text holds no
/// marker at all it is treated as a single-language abstract and the whole
/// text goes through the same line filtering.
///
/// # Examples
///
/// ```
/// use abstrak::transforms::{BilingualAbstractExtractor, Transform};
///
/// let text = "Abstract\nWe measure. Abstrak\nKami mengukur.\nKata kunci: ukur";
/// assert_eq!(
///     BilingualAbstractExtractor.transform(Some(text)),
///     "kami mengukur"
/// );
/// ```
pub struct BilingualAbstractExtractor;

impl BilingualAbstractExtractor {
    /// Returns the trimmed text following the last marker, or the whole text
    fn target_section(text: &str) -> &str {
        let start = MARKER_PATTERN
            .find_iter(text)
            .last()
            .map_or(0, |marker| marker.end());
        text[start..].trim()
    }

    fn is_keyword_line(line: &str) -> bool {
        line.trim().starts_with(KEYWORD_MARKER)
    }
}

impl Transform for BilingualAbstractExtractor {
    fn name(&self) -> &str {
        Stage::ExtractBilingualAbstract.as_str()
    }

    fn apply(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let section = Self::target_section(&lowered);

        let joined = LINE_SPLIT_PATTERN
            .split(section)
            .filter(|line| !Self::is_keyword_line(line))
            .collect::<Vec<&str>>()
            .join(" ");
        let joined = joined.trim();

        match joined.find(KEYWORD_MARKER) {
            Some(position) => joined[..position].to_string(),
            None => joined.to_string(),
        }
    }
}
