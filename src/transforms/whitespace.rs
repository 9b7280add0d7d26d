use super::{Stage, Transform};

/// Trims the text and, when enabled, collapses internal whitespace runs to a
/// single space
pub struct WhitespaceCollapser {
    collapse: bool,
}

impl Default for WhitespaceCollapser {
    fn default() -> Self {
        Self::new(true)
    }
}

impl WhitespaceCollapser {
    pub fn new(collapse: bool) -> Self {
        Self { collapse }
    }
}

impl Transform for WhitespaceCollapser {
    fn name(&self) -> &str {
        Stage::CollapseWhitespace.as_str()
    }

    fn apply(&self, text: &str) -> String {
        if self.collapse {
            text.split_whitespace().collect::<Vec<&str>>().join(" ")
        } else {
            text.trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse() {
        let t = WhitespaceCollapser::default();
        assert_eq!(t.transform(Some("  a \t b\n\nc  ")), "a b c");
        assert_eq!(t.transform(Some("   ")), "");
    }

    #[test]
    fn test_trim_only() {
        let t = WhitespaceCollapser::new(false);
        assert_eq!(t.transform(Some("  a \t b  ")), "a \t b");
    }

    #[test]
    fn test_collapse_idempotent() {
        let t = WhitespaceCollapser::default();
        for input in ["  x  y ", "x y", "\u{a0}x\u{2003}\u{2003}y"] {
            let once = t.transform(Some(input));
            assert_eq!(t.transform(Some(&once)), once);
        }
    }
}
