//! Module for shared constants used across the codebase

/// Built-in character sets used by the deletion stages
pub mod charsets {
    /// Standard ASCII punctuation
    pub const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

    /// Decorative symbols and extended Latin letters found in scraped abstracts
    pub const SPECIAL_CHARACTERS: &str = "å¼«¥ª°©ð±§µæ¹¢³¿®ä£";
}

/// Marker words recognised in bilingual abstracts
pub mod markers {
    /// Language markers introducing an abstract section (lowercase)
    pub const ABSTRACT_MARKERS: [&str; 2] = ["abstrak", "abstract"];

    /// Keyword marker in the target language (lowercase)
    pub const KEYWORD_MARKER: &str = "kata kunci";
}

pub mod chain {
    /// Name of the general preprocessing chain
    pub const LEXICAL: &str = "lexical";

    /// Name of the abstract extraction chain
    pub const ABSTRACT_EXTRACTION: &str = "abstract";

    /// Chain used when nothing is selected
    pub const DEFAULT_CHAIN: &str = LEXICAL;
}

pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONF_FILE: &str = "abstrak.toml";

    /// Default configuration content, `${date}` is replaced on creation
    pub const DEFAULT_CONF: &str = "# File automatically generated on ${date}\n\
                                    [defaults]\n\
                                    chain               = \"lexical\"\n\
                                    collapse_whitespace = true\n\
                                    # punctuation        = \"!?.,\"\n\
                                    # special_characters = \"°©®\"\n\n\
                                    # Custom chains can be declared by listing their stages, e.g.\n\
                                    # [chains.titles]\n\
                                    # stages = [\"strip_markup\", \"lower\", \"strip_punctuation\", \"collapse_whitespace\"]\n";
}
