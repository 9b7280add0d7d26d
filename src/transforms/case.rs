use super::{Stage, Transform};

/// Lowercases the whole text
pub struct Lowercase;

impl Transform for Lowercase {
    fn name(&self) -> &str {
        Stage::Lowercase.as_str()
    }

    fn apply(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

/// Uppercases the whole text
pub struct Uppercase;

impl Transform for Uppercase {
    fn name(&self) -> &str {
        Stage::Uppercase.as_str()
    }

    fn apply(&self, text: &str) -> String {
        text.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding() {
        assert_eq!(Lowercase.transform(Some("ABSTRAK")), "abstrak");
        assert_eq!(Lowercase.transform(Some("Kata Kunci: GIZI")), "kata kunci: gizi");
        assert_eq!(Uppercase.transform(Some("abstract")), "ABSTRACT");
        assert_eq!(Lowercase.transform(Some("ÅÄÖ")), "åäö");
    }
}
