//! # qprep - Query Preprocessing
//!
//! Normalizes free-text queries before they reach pattern recognizers
//! (numbers, dates, currencies, sizes).
//!
//! ## Architecture
//!
//! - [`recode`] - Full-width to half-width character recoding
//! - [`case`] - Lowercasing, optionally keeping unit tokens (`MB`, `kB`, ...) intact
//! - [`text`] - Trailing-character trimming and literal-delimiter splitting
//! - [`options`] - Preprocessing options (serde-loadable)
//! - [`output`] - Result formatting for the command-line front end
//!
//! ## Quick Start
//!
//! ```
//! use qprep::{preprocess, preprocess_with, PreprocessOptions};
//!
//! assert_eq!(preprocess("３２GB Free"), "32gb free");
//!
//! let opts = PreprocessOptions::new().case_sensitive(true);
//! assert_eq!(preprocess_with("３２ GB Free", opts), "32 GB free");
//! ```
//!
//! Every transform keeps the char count of its input, is free of shared
//! mutable state, and can be called from any thread.

pub mod case;
pub mod error;
pub mod options;
pub mod output;
pub mod recode;
pub mod text;

pub use case::{UnitMatch, find_unit_tokens, normalize, to_lower_term_sensitive};
pub use error::{Error, Result};
pub use options::PreprocessOptions;
pub use recode::{RECODE_TABLE, recode};
pub use text::{Splitter, split, trim_end, trim_end_chars};

/// Preprocess with the defaults: recode, then lowercase everything.
pub fn preprocess(query: &str) -> String {
    preprocess_with(query, PreprocessOptions::default())
}

/// Optionally recode `query`, then lowercase it (term-sensitively when
/// `options.case_sensitive` is set).
pub fn preprocess_with(query: &str, options: PreprocessOptions) -> String {
    if options.recode {
        normalize(&recode(query), options.case_sensitive)
    } else {
        normalize(query, options.case_sensitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_defaults() {
        assert_eq!(preprocess("３２GB"), "32gb");
        assert_eq!(preprocess("Meet At １２：３０"), "meet at 12:30");
    }

    #[test]
    fn test_preprocess_case_sensitive() {
        let opts = PreprocessOptions::new().case_sensitive(true);
        assert_eq!(preprocess_with("３２GB", opts), "32GB");
        assert_eq!(preprocess_with("Download 5 MB now", opts), "download 5 MB now");
        // Full-width unit letters are recoded before matching
        assert_eq!(preprocess_with("５ ＭB", opts), "5 MB");
    }

    #[test]
    fn test_preprocess_without_recode() {
        let opts = PreprocessOptions::new().recode(false);
        assert_eq!(preprocess_with("３２GB", opts), "３２gb");

        // Full-width digits are still Unicode digits, so the unit is kept
        let opts = opts.case_sensitive(true);
        assert_eq!(preprocess_with("３２GB", opts), "３２GB");
    }

    #[test]
    fn test_preprocess_empty() {
        assert_eq!(preprocess(""), "");
        assert_eq!(preprocess_with("", PreprocessOptions::new().case_sensitive(true)), "");
    }
}
