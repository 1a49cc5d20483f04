//! Small text helpers used by downstream recognizers.
//!
//! - [`trim_end`] / [`trim_end_chars`] - strip a trailing run of characters
//! - [`split`] / [`Splitter`] - split on literal delimiters, dropping empty segments

use crate::error::Result;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

/// Compiled-size ceiling for a delimiter alternation (the regex default is 10 MiB)
const SPLIT_SIZE_LIMIT: usize = 1 << 30;

/// Remove trailing ASCII whitespace (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`).
///
/// Other Unicode spaces such as U+3000 or U+00A0 are kept. Leading and
/// interior characters are untouched.
pub fn trim_end(input: &str) -> &str {
    input.trim_end_matches(|ch: char| matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
}

/// Remove the maximal trailing run of characters that occur in `chars`.
///
/// An empty `chars` set trims nothing.
pub fn trim_end_chars<'a>(input: &'a str, chars: &str) -> &'a str {
    if chars.is_empty() {
        return input;
    }
    input.trim_end_matches(|ch: char| chars.contains(ch))
}

/// Split `input` on any of `delimiters`, discarding empty segments.
///
/// Delimiters are literal strings; regex metacharacters in them are escaped.
/// Compiles the delimiter set on every call, use [`Splitter`] to reuse it.
pub fn split<'a, S: AsRef<str>>(input: &'a str, delimiters: &[S]) -> Vec<&'a str> {
    match Splitter::new(delimiters) {
        Ok(splitter) => splitter.split(input),
        Err(err) => {
            warn!(error = %err, "delimiter set too large to compile, scanning literally");
            let literals: Vec<&str> = delimiters.iter().map(|d| d.as_ref()).collect();
            split_literal(input, &literals)
        }
    }
}

/// Leftmost-first literal split: at each position the first delimiter in list
/// order that matches wins. Same segments as the compiled alternation.
fn split_literal<'a>(input: &'a str, delimiters: &[&str]) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut seg_start = 0;
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        match delimiters.iter().find(|d| !d.is_empty() && rest.starts_with(**d)) {
            Some(d) => {
                parts.push(&input[seg_start..pos]);
                pos += d.len();
                seg_start = pos;
            }
            None => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }
    parts.push(&input[seg_start..]);

    parts.retain(|s| !s.is_empty());
    parts
}

/// A compiled set of literal delimiters.
#[derive(Debug, Clone)]
pub struct Splitter {
    /// `None` when no non-empty delimiter was given
    pattern: Option<Regex>,
}

impl Splitter {
    /// Compile `delimiters` into one alternation. Empty delimiters are ignored.
    ///
    /// Fails only if the alternation exceeds the compiled-size limit (1 GiB).
    pub fn new<S: AsRef<str>>(delimiters: &[S]) -> Result<Self> {
        let alternatives: Vec<String> = delimiters
            .iter()
            .map(|d| d.as_ref())
            .filter(|d| !d.is_empty())
            .map(regex::escape)
            .collect();

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = RegexBuilder::new(&alternatives.join("|"))
            .size_limit(SPLIT_SIZE_LIMIT)
            .build()?;
        debug!(delimiters = alternatives.len(), "compiled splitter");

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Split `input`, keeping non-empty segments in left-to-right order.
    pub fn split<'a>(&self, input: &'a str) -> Vec<&'a str> {
        match &self.pattern {
            Some(re) => re.split(input).filter(|s| !s.is_empty()).collect(),
            None if input.is_empty() => Vec::new(),
            None => vec![input],
        }
    }
}
