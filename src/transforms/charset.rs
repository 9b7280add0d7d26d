use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Stage, Transform};

static NON_WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^ \w]").unwrap());

/// An immutable set of code points to delete from a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    chars: BTreeSet<char>,
}

impl CharSet {
    /// Parses a caller supplied set.
    ///
    /// # Errors
    /// Returns the cause as a message when the set is empty or contains
    /// whitespace (deleting whitespace would merge neighbouring tokens).
    ///
    /// # Examples
    ///
    /// ```
    /// use abstrak::transforms::CharSet;
    ///
    /// assert!(CharSet::parse("!?").is_ok());
    /// assert!(CharSet::parse("").is_err());
    /// assert!(CharSet::parse("a b").is_err());
    /// ```
    pub fn parse(chars: &str) -> std::result::Result<Self, String> {
        if chars.is_empty() {
            return Err("the character set is empty".to_string());
        }
        if let Some(ws) = chars.chars().find(|c| c.is_whitespace()) {
            return Err(format!(
                "whitespace ({:?}) is not allowed in a character set",
                ws
            ));
        }
        Ok(Self::from(chars))
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the text without any of the characters in the set
    pub fn strip(&self, text: &str) -> String {
        text.chars().filter(|c| !self.contains(*c)).collect()
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        Self {
            chars: chars.chars().collect(),
        }
    }
}

/// Deletes every character of a set, used by the punctuation and special
/// character stages
pub struct CharacterStripper {
    stage: Stage,
    set: CharSet,
}

impl CharacterStripper {
    pub fn new(stage: Stage, set: CharSet) -> Self {
        Self { stage, set }
    }

    pub fn set(&self) -> &CharSet {
        &self.set
    }
}

impl Transform for CharacterStripper {
    fn name(&self) -> &str {
        self.stage.as_str()
    }

    fn apply(&self, text: &str) -> String {
        self.set.strip(text)
    }
}

/// Keeps word characters and literal spaces, everything else is deleted
/// (tabs and line breaks included)
pub struct AlphanumericFilter;

impl Transform for AlphanumericFilter {
    fn name(&self) -> &str {
        Stage::KeepAlphanumeric.as_str()
    }

    fn apply(&self, text: &str) -> String {
        NON_WORD_PATTERN.replace_all(text, "").into_owned()
    }
}
