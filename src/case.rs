//! Lowercasing with case-significant unit tokens kept intact.
//!
//! Size suffixes such as `MB`/`Mb` or `KB`/`kB` carry meaning in their casing
//! (megabyte vs megabit), so the term-sensitive mode lowercases everything
//! except those tokens when they directly follow a digit or whitespace and end
//! on a word boundary.
//!
//! ```
//! use qprep::case::normalize;
//!
//! assert_eq!(normalize("Download 5 MB now", true), "download 5 MB now");
//! assert_eq!(normalize("Download 5 MB now", false), "download 5 mb now");
//! ```

use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Unit spellings whose casing survives term-sensitive lowercasing.
/// Alternation order matters: the engine takes the first alternative that
/// also satisfies the trailing word boundary.
pub const UNIT_TOKENS: &str = "kB|K[Bb]|K|M[Bb]|M|G[Bb]|G|B";

/// Unit tokens ending on a Unicode word boundary. The "preceded by whitespace
/// or digit" half of the rule is checked per candidate, see [`find_unit_tokens`].
static UNIT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?:{UNIT_TOKENS})\b")).expect("unit token pattern is valid")
});

/// A single character that may precede a unit token (Unicode `\s` or `\d`).
/// `\d` is decimal digits (Nd) only; `char::is_numeric` would also admit
/// letter-like and other numerics such as `Ⅻ` or `½`.
static TOKEN_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s\d]$").expect("token prefix pattern is valid"));

/// A unit token found in the original (not yet lowercased) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitMatch<'a> {
    /// Byte offset into the query
    pub byte_start: usize,
    /// Char offset into the query
    pub char_start: usize,
    /// Matched text with its original casing
    pub text: &'a str,
}

/// Lowercase `input`, or lowercase it term-sensitively when `case_sensitive` is set.
pub fn normalize(input: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        to_lower_term_sensitive(input)
    } else {
        input.to_lowercase()
    }
}

/// Find unit tokens in `input`, left to right and non-overlapping.
///
/// A candidate counts only when the character right before it is whitespace
/// or a decimal digit; the preceding character is inspected, not consumed.
/// A rejected candidate cannot hide a valid one: every char inside a token is
/// a letter, so no valid match can start within it.
pub fn find_unit_tokens(input: &str) -> Vec<UnitMatch<'_>> {
    let mut matches = Vec::new();
    let mut char_pos = 0;
    let mut byte_pos = 0;

    for m in UNIT_TOKEN.find_iter(input) {
        if !follows_space_or_digit(input, m.start()) {
            continue;
        }

        char_pos += input[byte_pos..m.start()].chars().count();
        byte_pos = m.start();

        matches.push(UnitMatch {
            byte_start: m.start(),
            char_start: char_pos,
            text: m.as_str(),
        });
    }

    matches
}

fn follows_space_or_digit(input: &str, start: usize) -> bool {
    match input[..start].chars().next_back() {
        Some(prev) => TOKEN_PREFIX.is_match(&input[start - prev.len_utf8()..start]),
        None => false,
    }
}

/// Lowercase `input` while restoring the original casing of unit tokens.
///
/// The lowercase copy is held as a char buffer aligned index-for-index with the
/// original, and each match is written back over its own range. The result
/// always has exactly as many chars as the input.
pub fn to_lower_term_sensitive(input: &str) -> String {
    let matches = find_unit_tokens(input);
    let lowered = lowercase_aligned(input);

    if matches.is_empty() {
        return lowered;
    }

    let mut buf: Vec<char> = lowered.chars().collect();
    for m in &matches {
        trace!(token = m.text, at = m.char_start, "restoring unit token");
        for (i, ch) in m.text.chars().enumerate() {
            buf[m.char_start + i] = ch;
        }
    }

    debug!(restored = matches.len(), len = buf.len(), "term-sensitive lowercase");
    buf.into_iter().collect()
}

/// Lowercase without changing the char count.
///
/// Whole-string lowercasing is preferred since it handles context such as
/// word-final sigma. Only if some char expands (U+0130 lowercases to two
/// chars) does it fall back to per-char mapping, keeping the first char of
/// each expansion.
fn lowercase_aligned(input: &str) -> String {
    let lowered = input.to_lowercase();
    if lowered.chars().count() == input.chars().count() {
        return lowered;
    }

    input
        .chars()
        .map(|ch| ch.to_lowercase().next().unwrap_or(ch))
        .collect()
}
