use std::str::FromStr;
use std::sync::Arc;

use strum_macros::{Display, IntoStaticStr};

use super::{
    AbstractMarkerStripper, AlphanumericFilter, BilingualAbstractExtractor, CharSet,
    CharacterStripper, KeywordTrailerStripper, Lowercase, NbspStripper, PatternStripper,
    SecondLanguageStripper, Transform, Uppercase, WhitespaceCollapser,
};
use crate::constants::charsets;
use crate::error::{Error, Result};

/// The named stages a chain can be assembled from
#[derive(Debug, Display, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    #[strum(serialize = "lower")]
    Lowercase,
    #[strum(serialize = "upper")]
    Uppercase,
    StripUrls,
    StripEmails,
    StripPhoneNumbers,
    StripMarkup,
    StripNbsp,
    StripDigits,
    StripItemization,
    StripPunctuation,
    StripSpecialCharacters,
    KeepAlphanumeric,
    CollapseWhitespace,
    StripAbstractMarker,
    StripKeywordTrailer,
    StripSecondLanguage,
    ExtractBilingualAbstract,
}

impl Stage {
    pub const ALL: [Stage; 17] = [
        Stage::Lowercase,
        Stage::Uppercase,
        Stage::StripUrls,
        Stage::StripEmails,
        Stage::StripPhoneNumbers,
        Stage::StripMarkup,
        Stage::StripNbsp,
        Stage::StripDigits,
        Stage::StripItemization,
        Stage::StripPunctuation,
        Stage::StripSpecialCharacters,
        Stage::KeepAlphanumeric,
        Stage::CollapseWhitespace,
        Stage::StripAbstractMarker,
        Stage::StripKeywordTrailer,
        Stage::StripSecondLanguage,
        Stage::ExtractBilingualAbstract,
    ];

    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// One line description used when listing stages
    pub fn description(&self) -> &'static str {
        match self {
            Stage::Lowercase => "Lowercases the whole text",
            Stage::Uppercase => "Uppercases the whole text",
            Stage::StripUrls => "Removes runs starting with www or http",
            Stage::StripEmails => "Removes e-mail addresses",
            Stage::StripPhoneNumbers => "Removes 3-3-4 phone numbers with optional country code",
            Stage::StripMarkup => "Removes <tags> and &entities;",
            Stage::StripNbsp => "Removes literal &nbsp markers",
            Stage::StripDigits => "Removes digit runs",
            Stage::StripItemization => "Removes bullet and numbering tokens",
            Stage::StripPunctuation => "Removes the punctuation set",
            Stage::StripSpecialCharacters => "Removes the special character set",
            Stage::KeepAlphanumeric => "Keeps only word characters and spaces",
            Stage::CollapseWhitespace => "Trims and collapses whitespace",
            Stage::StripAbstractMarker => "Removes a leading Abstract/Abstrak marker",
            Stage::StripKeywordTrailer => "Removes everything from Kata kunci/Keywords on",
            Stage::StripSecondLanguage => "Removes everything from Abstract/Abstrak on",
            Stage::ExtractBilingualAbstract => {
                "Keeps the section after the last abstract marker, without keywords"
            }
        }
    }

    /// Builds the transform for this stage using the given options
    ///
    /// # Errors
    /// Returns `Error::InvalidCharacterSet` if a custom character set used by
    /// this stage is malformed.
    pub fn build(&self, options: &ChainOptions) -> Result<Arc<dyn Transform>> {
        let transform: Arc<dyn Transform> = match self {
            Stage::Lowercase => Arc::new(Lowercase),
            Stage::Uppercase => Arc::new(Uppercase),
            Stage::StripUrls => Arc::new(PatternStripper::urls()),
            Stage::StripEmails => Arc::new(PatternStripper::emails()),
            Stage::StripPhoneNumbers => Arc::new(PatternStripper::phone_numbers()),
            Stage::StripMarkup => Arc::new(PatternStripper::markup()),
            Stage::StripNbsp => Arc::new(NbspStripper),
            Stage::StripDigits => Arc::new(PatternStripper::digits()),
            Stage::StripItemization => Arc::new(PatternStripper::itemization()),
            Stage::StripPunctuation => Arc::new(CharacterStripper::new(
                *self,
                self.charset(options.punctuation.as_deref(), charsets::ASCII_PUNCTUATION)?,
            )),
            Stage::StripSpecialCharacters => Arc::new(CharacterStripper::new(
                *self,
                self.charset(
                    options.special_characters.as_deref(),
                    charsets::SPECIAL_CHARACTERS,
                )?,
            )),
            Stage::KeepAlphanumeric => Arc::new(AlphanumericFilter),
            Stage::CollapseWhitespace => Arc::new(WhitespaceCollapser::new(options.collapse())),
            Stage::StripAbstractMarker => Arc::new(AbstractMarkerStripper),
            Stage::StripKeywordTrailer => Arc::new(KeywordTrailerStripper),
            Stage::StripSecondLanguage => Arc::new(SecondLanguageStripper),
            Stage::ExtractBilingualAbstract => Arc::new(BilingualAbstractExtractor),
        };
        Ok(transform)
    }

    fn charset(&self, custom: Option<&str>, default: &str) -> Result<CharSet> {
        match custom {
            Some(chars) => CharSet::parse(chars).map_err(|cause| Error::InvalidCharacterSet {
                stage: self.to_string(),
                cause,
            }),
            None => Ok(CharSet::from(default)),
        }
    }
}

impl FromStr for Stage {
    type Err = Error;

    /// Parses a stage name. Dashes are accepted in place of underscores and a
    /// few historical aliases are recognised.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        let stage = match normalized.as_str() {
            "lower" | "lowercase" | "to_lower" => Stage::Lowercase,
            "upper" | "uppercase" | "to_upper" => Stage::Uppercase,
            "strip_urls" | "remove_url" => Stage::StripUrls,
            "strip_emails" | "remove_email" => Stage::StripEmails,
            "strip_phone_numbers" | "remove_phone_number" => Stage::StripPhoneNumbers,
            "strip_markup" | "remove_tag" => Stage::StripMarkup,
            "strip_nbsp" | "remove_nbsp" => Stage::StripNbsp,
            "strip_digits" | "remove_number" => Stage::StripDigits,
            "strip_itemization" | "remove_itemized_bullet_and_numbering" => {
                Stage::StripItemization
            }
            "strip_punctuation" | "remove_punctuation" => Stage::StripPunctuation,
            "strip_special_characters" | "remove_special_character" => {
                Stage::StripSpecialCharacters
            }
            "keep_alphanumeric" | "keep_alpha_numeric" => Stage::KeepAlphanumeric,
            "collapse_whitespace" | "remove_whitespace" => Stage::CollapseWhitespace,
            "strip_abstract_marker" | "remove_abs_word" => Stage::StripAbstractMarker,
            "strip_keyword_trailer" | "remove_katakunci" => Stage::StripKeywordTrailer,
            "strip_second_language" | "remove_multilang" => Stage::StripSecondLanguage,
            "extract_bilingual_abstract" | "bersihkan_abstrak" => Stage::ExtractBilingualAbstract,
            _ => return Err(Error::UnknownStage(s.to_string())),
        };
        Ok(stage)
    }
}

/// Per-chain configuration consumed by the parametrized stages.
///
/// Unset values fall back to the built-in defaults: ASCII punctuation, the
/// decorative special character set and whitespace collapsing enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainOptions {
    pub punctuation: Option<String>,
    pub special_characters: Option<String>,
    pub collapse_whitespace: Option<bool>,
}

impl ChainOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn punctuation(mut self, chars: &str) -> Self {
        self.punctuation = Some(chars.to_string());
        self
    }

    pub fn special_characters(mut self, chars: &str) -> Self {
        self.special_characters = Some(chars.to_string());
        self
    }

    pub fn collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse_whitespace = Some(collapse);
        self
    }

    /// Whether internal whitespace runs are collapsed (defaults to true)
    pub fn collapse(&self) -> bool {
        self.collapse_whitespace.unwrap_or(true)
    }

    /// Returns a copy of these options where every value set in `other` wins
    pub fn overlay(&self, other: &ChainOptions) -> ChainOptions {
        ChainOptions {
            punctuation: other.punctuation.clone().or_else(|| self.punctuation.clone()),
            special_characters: other
                .special_characters
                .clone()
                .or_else(|| self.special_characters.clone()),
            collapse_whitespace: other.collapse_whitespace.or(self.collapse_whitespace),
        }
    }
}
