use once_cell::sync::Lazy;
use regex::Regex;

use super::{Stage, Transform};

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:www|http)\S+").unwrap());

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").unwrap());

// Optional country code, 3-3-4 digit groups and an optional " x123" extension
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3})?[-. (]*\d{3}[-. )]*\d{3}[-. ]*\d{4}(?: *x\d+)?").unwrap()
});

// Tags may span lines, entities are named, decimal or hexadecimal
static MARKUP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]*>|(?i:&(?:[a-z0-9]+|#[0-9]{1,6}|#x[0-9a-f]{1,6});)").unwrap()
});

static DIGITS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

static ITEMIZATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|[(\s])(?:[0-9a-zA-Z]|[ivxIVX]+)[.)]\s+").unwrap()
});

/// Replaces every match of a fixed pattern with a fixed replacement
pub struct PatternStripper {
    stage: Stage,
    pattern: &'static Lazy<Regex>,
    replacement: &'static str,
}

impl PatternStripper {
    fn new(stage: Stage, pattern: &'static Lazy<Regex>, replacement: &'static str) -> Self {
        Self {
            stage,
            pattern,
            replacement,
        }
    }

    pub fn urls() -> Self {
        Self::new(Stage::StripUrls, &URL_PATTERN, "")
    }

    pub fn emails() -> Self {
        Self::new(Stage::StripEmails, &EMAIL_PATTERN, "")
    }

    pub fn phone_numbers() -> Self {
        Self::new(Stage::StripPhoneNumbers, &PHONE_PATTERN, "")
    }

    pub fn markup() -> Self {
        Self::new(Stage::StripMarkup, &MARKUP_PATTERN, "")
    }

    pub fn digits() -> Self {
        Self::new(Stage::StripDigits, &DIGITS_PATTERN, "")
    }

    /// Bullet tokens are replaced by a single space so the surrounding words stay apart
    pub fn itemization() -> Self {
        Self::new(Stage::StripItemization, &ITEMIZATION_PATTERN, " ")
    }
}

impl Transform for PatternStripper {
    fn name(&self) -> &str {
        self.stage.as_str()
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, regex::NoExpand(self.replacement))
            .into_owned()
    }
}

/// Removes literal `&nbsp` markers, with or without the closing semicolon
pub struct NbspStripper;

impl Transform for NbspStripper {
    fn name(&self) -> &str {
        Stage::StripNbsp.as_str()
    }

    fn apply(&self, text: &str) -> String {
        text.replace("&nbsp", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(t: &dyn Transform, text: &str) -> String {
        t.transform(Some(text))
    }

    #[test]
    fn test_strip_urls() {
        let t = PatternStripper::urls();
        assert_eq!(run(&t, "see http://x.co for more"), "see  for more");
        assert_eq!(run(&t, "visit www.example.org/a?b=1 now"), "visit  now");
        assert_eq!(run(&t, "https://a.b"), "");
        assert_eq!(run(&t, "no links here"), "no links here");
    }

    #[test]
    fn test_strip_emails() {
        let t = PatternStripper::emails();
        assert_eq!(run(&t, "contact: a@b.com, now"), "contact: , now");
        assert_eq!(
            run(&t, "mail first.last+tag@uni-x.ac.id today"),
            "mail  today"
        );
        assert_eq!(run(&t, "user@localhost"), "user@localhost");
    }

    #[test]
    fn test_strip_phone_numbers() {
        let t = PatternStripper::phone_numbers();
        // The separator class also swallows the space before the number
        assert_eq!(run(&t, "call 555-123-4567 now"), "call now");
        assert_eq!(run(&t, "call +1 (555) 123-4567 x89 now"), "call  now");
        assert_eq!(run(&t, "call 555.123.4567"), "call");
        assert_eq!(run(&t, "call 021-5551234"), "call");
        assert_eq!(run(&t, "call 12-345"), "call 12-345");
    }

    #[test]
    fn test_strip_markup() {
        let t = PatternStripper::markup();
        assert_eq!(run(&t, "<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(run(&t, "a&amp;b &#123;c&#x1A;"), "ab c");
        assert_eq!(run(&t, "x &nbsp; y"), "x  y");
        assert_eq!(run(&t, "<div\nclass=\"a\">z</div>"), "z");
        assert_eq!(run(&t, "fish & chips"), "fish & chips");
    }

    #[test]
    fn test_strip_nbsp() {
        assert_eq!(run(&NbspStripper, "a&nbsp;b&nbspc"), "a;bc");
        assert_eq!(run(&NbspStripper, "plain"), "plain");
    }

    #[test]
    fn test_strip_digits() {
        let t = PatternStripper::digits();
        assert_eq!(run(&t, "v1.2 in 2023"), "v. in ");
        assert_eq!(run(&t, "no numbers"), "no numbers");
    }

    #[test]
    fn test_strip_itemization() {
        let t = PatternStripper::itemization();
        assert_eq!(
            run(&t, "goals: 1. collect a) clean ii) label"),
            "goals: collect clean label"
        );
        assert_eq!(run(&t, "1. first item"), " first item");
        assert_eq!(run(&t, "(b) second"), " second");
        // Abbreviations are not followed by whitespace after the first dot
        assert_eq!(run(&t, "see e.g. here"), "see e.g. here");
    }
}
