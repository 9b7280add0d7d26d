//! `abstrak` is a library to normalize noisy, bilingual academic abstracts
//! into a clean token stream.
//!
//! Texts go through a `chain::Chain`, an ordered list of independent
//! transforms (see `transforms`). Two chains are built in: `lexical` for
//! general preprocessing and `abstract` for extracting the single-language
//! body of a bilingual abstract. Custom chains can be assembled from stage
//! names, or declared in the configuration file used by the binary.
//!
//! "Hello world" example:
//! ```
//! use abstrak::prelude::*;
//!
//! let chain = Chain::from_kind(ChainKind::AbstractExtraction, &ChainOptions::default()).unwrap();
//! let text = "Abstract\nWe study 3 diets.\nAbstrak\nKami meneliti 3 diet.\nKata kunci: diet";
//!
//! assert_eq!(chain.process(Some(text)), "kami meneliti diet");
//! assert_eq!(preprocess(Some("Visit www.x.org, NOW!"), None), "visit now");
//! ```

pub mod chain;
pub mod config;
pub mod constants;
pub mod error;
pub mod log;
pub mod reader;
pub mod transforms;

/// The abstrak prelude
///
/// This module re-exports the most commonly used items from abstrak.
/// You can use it with `use abstrak::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::transforms::Transform;

    // Re-export commonly used types
    pub use crate::chain::{Chain, ChainKind, StageEvent};
    pub use crate::error::{Error, Result};
    pub use crate::transforms::{ChainOptions, Stage};

    // Re-export commonly used functions
    pub use crate::chain::preprocess;
    pub use crate::transforms::invoke;
}
