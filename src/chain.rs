use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::constants::chain::{ABSTRACT_EXTRACTION, LEXICAL};
use crate::error::{Error, Result};
use crate::transforms::{ChainOptions, Stage, Transform};

/// Notification emitted after each stage of a chain has run
#[derive(Debug)]
pub struct StageEvent<'a> {
    pub chain: &'a str,
    pub index: usize,
    pub stage: &'a str,
    pub input: &'a str,
    pub output: &'a str,
}

/// Callback receiving stage events, injected into a chain
pub type StageObserver = Arc<dyn Fn(&StageEvent) + Send + Sync>;

/// The built-in chain policies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    /// General preprocessing: case folding, contact info, numbering and punctuation removal
    Lexical,
    /// Markup removal and bilingual extraction followed by generic cleanup
    AbstractExtraction,
}

impl ChainKind {
    pub const ALL: [ChainKind; 2] = [ChainKind::Lexical, ChainKind::AbstractExtraction];

    pub fn name(&self) -> &'static str {
        match self {
            ChainKind::Lexical => LEXICAL,
            ChainKind::AbstractExtraction => ABSTRACT_EXTRACTION,
        }
    }

    /// The ordered stages of the chain
    pub fn stages(&self) -> &'static [Stage] {
        match self {
            ChainKind::Lexical => &[
                Stage::Lowercase,
                Stage::StripUrls,
                Stage::StripEmails,
                Stage::StripNbsp,
                Stage::StripPhoneNumbers,
                Stage::StripDigits,
                Stage::StripItemization,
                Stage::StripSpecialCharacters,
                Stage::StripPunctuation,
                Stage::KeepAlphanumeric,
                Stage::CollapseWhitespace,
            ],
            ChainKind::AbstractExtraction => &[
                Stage::StripMarkup,
                Stage::ExtractBilingualAbstract,
                Stage::StripNbsp,
                Stage::StripSpecialCharacters,
                Stage::KeepAlphanumeric,
                Stage::StripDigits,
                Stage::CollapseWhitespace,
            ],
        }
    }
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChainKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "lexical" => Ok(ChainKind::Lexical),
            "abstract" | "abstract-extraction" => Ok(ChainKind::AbstractExtraction),
            _ => Err(Error::UnknownChain(s.to_string())),
        }
    }
}

/// An ordered, reusable list of transforms.
///
/// Stages are applied in insertion order, the output of one being the input
/// of the next. A chain holds no text and no mutable state, so a single
/// instance can be shared between threads.
pub struct Chain {
    name: String,
    stages: Vec<Arc<dyn Transform>>,
    observer: Option<StageObserver>,
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("name", &self.name)
            .field("stages", &self.stage_names())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl Chain {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stages: Vec::new(),
            observer: None,
        }
    }

    /// Builds one of the built-in chains
    ///
    /// # Examples
    ///
    /// ```
    /// use abstrak::chain::{Chain, ChainKind};
    /// use abstrak::transforms::ChainOptions;
    ///
    /// let chain = Chain::from_kind(ChainKind::Lexical, &ChainOptions::default()).unwrap();
    /// assert_eq!(chain.process(Some("Hello, World!")), "hello world");
    /// ```
    pub fn from_kind(kind: ChainKind, options: &ChainOptions) -> Result<Self> {
        Self::from_stages(kind.name(), kind.stages(), options)
    }

    /// Builds a chain from an ordered list of stages.
    ///
    /// # Errors
    /// Fails fast with `Error::InvalidCharacterSet` when the options hold a
    /// malformed character set for one of the stages.
    pub fn from_stages(name: &str, stages: &[Stage], options: &ChainOptions) -> Result<Self> {
        let mut chain = Self::new(name);
        for stage in stages {
            chain.push(stage.build(options)?);
        }
        Ok(chain)
    }

    /// Builds a chain from stage names.
    ///
    /// # Errors
    /// Returns `Error::UnknownStage` for a name that is not a stage.
    pub fn from_names<S: AsRef<str>>(
        name: &str,
        stage_names: &[S],
        options: &ChainOptions,
    ) -> Result<Self> {
        let stages = stage_names
            .iter()
            .map(|s| s.as_ref().parse::<Stage>())
            .collect::<Result<Vec<Stage>>>()?;
        Self::from_stages(name, &stages, options)
    }

    pub fn register<T: Transform + 'static>(&mut self, transform: T) {
        self.push(Arc::new(transform));
    }

    pub fn push(&mut self, transform: Arc<dyn Transform>) {
        self.stages.push(transform);
    }

    /// Attaches an observer called after every stage
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&StageEvent) + Send + Sync + 'static,
    {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn chain_name(&self) -> &str {
        &self.name
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Process the text through all the stages in sequence
    ///
    /// # Arguments
    /// * `text` - The text to process, `None` when absent
    ///
    /// # Returns
    /// The processed text, empty when the input is absent or every stage emptied it
    pub fn process(&self, text: Option<&str>) -> String {
        let start = text.unwrap_or_default().to_string();
        self.stages
            .iter()
            .enumerate()
            .fold(start, |acc, (index, stage)| {
                let output = stage.transform(Some(&acc));
                if let Some(observer) = &self.observer {
                    observer(&StageEvent {
                        chain: &self.name,
                        index,
                        stage: stage.name(),
                        input: &acc,
                        output: &output,
                    });
                }
                output
            })
    }
}

/// A chain is itself a transform, so chains can be nested
impl Transform for Chain {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, text: &str) -> String {
        self.process(Some(text))
    }
}

static LEXICAL_CHAIN: Lazy<Chain> = Lazy::new(|| {
    Chain::from_kind(ChainKind::Lexical, &ChainOptions::default())
        .expect("default options always build the lexical chain")
});

/// The shared lexical chain built with default options
pub fn default_chain() -> &'static Chain {
    &LEXICAL_CHAIN
}

/// Preprocesses a text with the given chain, or the default lexical chain
///
/// # Examples
///
/// ```
/// use abstrak::chain::preprocess;
///
/// assert_eq!(preprocess(Some("See www.x.org NOW!"), None), "see now");
/// assert_eq!(preprocess(None, None), "");
/// ```
pub fn preprocess(text: Option<&str>, chain: Option<&Chain>) -> String {
    chain.unwrap_or(&LEXICAL_CHAIN).process(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::thread;

    fn from_names(names: &[&str], options: &ChainOptions) -> Chain {
        Chain::from_names("test", names, options).unwrap()
    }

    #[test]
    fn test_lexical_end_to_end() {
        let chain = from_names(
            &[
                "lower",
                "strip_urls",
                "strip_emails",
                "strip_phone_numbers",
                "strip_digits",
                "strip_punctuation",
                "keep_alphanumeric",
                "collapse_whitespace",
            ],
            &ChainOptions::default(),
        );
        let input = "Contact: a@b.com, call 021-5551234. See http://x.co for v1. details.";
        assert_eq!(chain.process(Some(input)), "contact call see for v details");
    }

    #[test]
    fn test_default_lexical_chain_strips_numbering() {
        let input = "Contact: a@b.com, call 021-5551234. See http://x.co for v1. details.";
        // The itemization stage removes the single letter left before "details"
        assert_eq!(preprocess(Some(input), None), "contact call see for details");
    }

    #[test]
    fn test_preprocess_with_borrowed_chain() {
        let chain = from_names(&["upper"], &ChainOptions::default());
        assert_eq!(preprocess(Some("abc 1"), Some(&chain)), "ABC 1");
        assert_eq!(preprocess(Some("ABC 1"), None), "abc");
    }

    #[test]
    fn test_default_chain_has_every_lexical_stage() {
        let expected: Vec<&str> = ChainKind::Lexical.stages().iter().map(|s| s.as_str()).collect();
        assert_eq!(default_chain().stage_names(), expected);
        assert_eq!(default_chain().chain_name(), LEXICAL);
    }

    #[test]
    fn test_abstract_extraction_chain() {
        let chain =
            Chain::from_kind(ChainKind::AbstractExtraction, &ChainOptions::default()).unwrap();
        let input = "<p>Deficiency or excess intake in 2020...</p>\n&nbsp;\nABSTRAK\n<b>Kekurangan</b> atau kelebihan asupan (15%) © 2020...\nKata kunci: gizi, ibu hamil";
        assert_eq!(
            chain.process(Some(input)),
            "kekurangan atau kelebihan asupan"
        );
    }

    #[test]
    fn test_empty_and_absent_input() {
        for kind in ChainKind::ALL {
            let chain = Chain::from_kind(kind, &ChainOptions::default()).unwrap();
            assert_eq!(chain.process(None), "");
            assert_eq!(chain.process(Some("")), "");
        }
        assert_eq!(Chain::new("empty").process(Some("as is")), "as is");
    }

    #[test]
    fn test_fully_emptied_text() {
        assert_eq!(preprocess(Some("!!! 123 ???"), None), "");
    }

    #[test]
    fn test_order_is_application_order() {
        let options = ChainOptions::default();
        let trailer_first = from_names(&["strip_keyword_trailer", "lower"], &options);
        let upper_first = from_names(&["upper", "strip_keyword_trailer"], &options);
        let text = "Result. Keywords: x";
        assert_eq!(trailer_first.process(Some(text)), "result. ");
        assert_eq!(upper_first.process(Some(text)), "RESULT. ");

        let digits_then_items = from_names(&["strip_digits", "strip_itemization"], &options);
        let items_then_digits = from_names(&["strip_itemization", "strip_digits"], &options);
        let text = "steps 1) mix 2) bake";
        assert_eq!(digits_then_items.process(Some(text)), "steps ) mix ) bake");
        assert_eq!(items_then_digits.process(Some(text)), "steps mix bake");
    }

    #[test]
    fn test_punctuation_and_alphanumeric_order() {
        let text = "Data_set, v2: ok!";
        let defaults = ChainOptions::default();
        let punct_first = from_names(&["strip_punctuation", "keep_alphanumeric"], &defaults);
        let alnum_first = from_names(&["keep_alphanumeric", "strip_punctuation"], &defaults);
        let alnum_only = from_names(&["keep_alphanumeric"], &defaults);
        assert_eq!(punct_first.process(Some(text)), "Dataset v2 ok");
        assert_eq!(
            punct_first.process(Some(text)),
            alnum_first.process(Some(text))
        );

        // Both are per-character deletions, so they commute even with an
        // override, but the punctuation stage is no longer subsumed
        let custom = ChainOptions::new().punctuation("ao");
        let punct_first = from_names(&["strip_punctuation", "keep_alphanumeric"], &custom);
        let alnum_first = from_names(&["keep_alphanumeric", "strip_punctuation"], &custom);
        assert_eq!(punct_first.process(Some(text)), "Dt_set v2 k");
        assert_eq!(
            punct_first.process(Some(text)),
            alnum_first.process(Some(text))
        );
        assert_ne!(
            punct_first.process(Some(text)),
            alnum_only.process(Some(text))
        );
    }

    #[test]
    fn test_unknown_stage_fails_at_construction() {
        let err = Chain::from_names("bad", &["lower", "stem"], &ChainOptions::default());
        assert!(matches!(err, Err(Error::UnknownStage(name)) if name == "stem"));
    }

    #[test]
    fn test_malformed_set_fails_at_construction() {
        let options = ChainOptions::new().punctuation("");
        assert!(Chain::from_kind(ChainKind::Lexical, &options).is_err());
        // The abstract chain has no punctuation stage
        assert!(Chain::from_kind(ChainKind::AbstractExtraction, &options).is_ok());
    }

    #[test]
    fn test_chain_kind_names() {
        assert_eq!("lexical".parse::<ChainKind>().unwrap(), ChainKind::Lexical);
        assert_eq!(
            "Abstract_Extraction".parse::<ChainKind>().unwrap(),
            ChainKind::AbstractExtraction
        );
        assert_eq!(ChainKind::AbstractExtraction.to_string(), "abstract");
        assert!(matches!(
            "bogus".parse::<ChainKind>(),
            Err(Error::UnknownChain(_))
        ));
    }

    #[test]
    fn test_observer_sees_every_stage() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let chain = from_names(&["lower", "strip_digits"], &ChainOptions::default())
            .with_observer(move |event| {
                sink.lock().unwrap().push(format!(
                    "{}#{} {}: {} -> {}",
                    event.chain, event.index, event.stage, event.input, event.output
                ));
            });
        assert_eq!(chain.process(Some("A1")), "a");
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["test#0 lower: A1 -> a1", "test#1 strip_digits: a1 -> a"]
        );
    }

    #[test]
    fn test_nested_chains() {
        let options = ChainOptions::default();
        let inner = from_names(&["strip_markup", "lower"], &options);
        let mut outer = Chain::new("outer");
        outer.register(inner);
        outer.push(Stage::CollapseWhitespace.build(&options).unwrap());
        assert_eq!(outer.stage_names(), vec!["test", "collapse_whitespace"]);
        assert_eq!(outer.process(Some("<i>A</i>   B")), "a b");
        assert_eq!(outer.len(), 2);
    }

    #[test]
    fn test_shared_between_threads() {
        let chain = Arc::new(
            Chain::from_kind(ChainKind::Lexical, &ChainOptions::default()).unwrap(),
        );
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let chain = Arc::clone(&chain);
                thread::spawn(move || chain.process(Some(&format!("Item {}: OK!", i))))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "item ok");
        }
    }
}
