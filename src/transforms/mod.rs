use crate::error::{Error, Result};

mod bilingual;
mod case;
mod charset;
mod markers;
mod patterns;
mod stage;
mod whitespace;

pub use bilingual::BilingualAbstractExtractor;
pub use case::{Lowercase, Uppercase};
pub use charset::{AlphanumericFilter, CharSet, CharacterStripper};
pub use markers::{AbstractMarkerStripper, KeywordTrailerStripper, SecondLanguageStripper};
pub use patterns::{NbspStripper, PatternStripper};
pub use stage::{ChainOptions, Stage};
pub use whitespace::WhitespaceCollapser;

/// Trait for text transformations in the cleaning chain
///
/// Implementors only provide the core logic in [`Transform::apply`], which is
/// never called with an empty text. Callers go through [`Transform::transform`],
/// which short-circuits absent or empty input to an empty result.
pub trait Transform: Send + Sync {
    /// Name identifying the transform in chains and diagnostics
    fn name(&self) -> &str;

    /// Core logic, only reached for non-empty text
    fn apply(&self, text: &str) -> String;

    /// Transforms the input text, returning an empty text for absent or empty input
    ///
    /// # Examples
    ///
    /// ```
    /// use abstrak::transforms::{Lowercase, Transform};
    ///
    /// assert_eq!(Lowercase.transform(Some("ABSTRAK")), "abstrak");
    /// assert_eq!(Lowercase.transform(Some("")), "");
    /// assert_eq!(Lowercase.transform(None), "");
    /// ```
    fn transform(&self, text: Option<&str>) -> String {
        match text {
            Some(text) if !text.is_empty() => self.apply(text),
            _ => String::new(),
        }
    }
}

/// Invokes a transform with positional arguments, the first one being the text.
///
/// An absent (`None`) or empty first argument is a normal no-op yielding an
/// empty text. Supplying no argument at all is a caller error.
///
/// # Errors
/// Returns `Error::InvalidInvocation` when `args` is empty.
///
/// # Examples
///
/// ```
/// use abstrak::transforms::{invoke, Uppercase};
///
/// assert_eq!(invoke(&Uppercase, &[Some("abc")]).unwrap(), "ABC");
/// assert_eq!(invoke(&Uppercase, &[None]).unwrap(), "");
/// assert!(invoke(&Uppercase, &[]).is_err());
/// ```
pub fn invoke(transform: &dyn Transform, args: &[Option<&str>]) -> Result<String> {
    match args.first() {
        Some(text) => Ok(transform.transform(*text)),
        None => Err(Error::InvalidInvocation(transform.name().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
    }

    impl Transform for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn apply(&self, text: &str) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            format!("[{}]", text)
        }
    }

    #[test]
    fn test_guard_skips_core_logic() {
        let t = Counting {
            calls: AtomicUsize::new(0),
        };
        assert_eq!(t.transform(None), "");
        assert_eq!(t.transform(Some("")), "");
        assert_eq!(t.calls.load(Ordering::SeqCst), 0);

        assert_eq!(t.transform(Some("x")), "[x]");
        assert_eq!(t.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_invoke_without_text_fails() {
        let t = Counting {
            calls: AtomicUsize::new(0),
        };
        match invoke(&t, &[]) {
            Err(Error::InvalidInvocation(name)) => assert_eq!(name, "counting"),
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(invoke(&t, &[Some("")]).unwrap(), "");
        assert_eq!(invoke(&t, &[None, Some("ignored")]).unwrap(), "");
    }

    #[test]
    fn test_every_stage_maps_empty_to_empty() {
        let options = ChainOptions::default();
        for stage in Stage::ALL {
            let t = stage.build(&options).unwrap();
            assert_eq!(t.transform(Some("")), "", "stage {}", stage);
            assert_eq!(t.transform(None), "", "stage {}", stage);
            assert_eq!(invoke(t.as_ref(), &[None]).unwrap(), "", "stage {}", stage);
            assert!(invoke(t.as_ref(), &[]).is_err(), "stage {}", stage);
        }
    }
}
