use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Full-width code points and the half-width characters they recode to.
pub const RECODE_TABLE: [(char, char); 24] = [
    ('０', '0'),
    ('１', '1'),
    ('２', '2'),
    ('３', '3'),
    ('４', '4'),
    ('５', '5'),
    ('６', '6'),
    ('７', '7'),
    ('８', '8'),
    ('９', '9'),
    ('：', ':'),
    ('－', '-'),
    ('，', ','),
    ('／', '/'),
    ('Ｇ', 'G'),
    ('Ｍ', 'M'),
    ('Ｔ', 'T'),
    ('Ｋ', 'K'),
    ('ｋ', 'k'),
    ('．', '.'),
    ('（', '('),
    ('）', ')'),
    ('％', '%'),
    ('、', ','),
];

static HALF_WIDTH: LazyLock<FxHashMap<char, char>> =
    LazyLock::new(|| RECODE_TABLE.iter().copied().collect());

/// Half-width equivalent of `ch`, if it is one of the recoded full-width characters.
#[inline]
pub fn half_width(ch: char) -> Option<char> {
    // Every table key is outside ASCII
    if ch.is_ascii() {
        return None;
    }
    HALF_WIDTH.get(&ch).copied()
}

/// Replace full-width digits, punctuation and unit letters with their ASCII forms.
///
/// Every other character passes through unchanged, so the output has the same
/// number of chars as the input (byte length shrinks by two per replacement).
pub fn recode(input: &str) -> String {
    // Fast path: nothing to recode in pure ASCII
    if input.is_ascii() {
        return input.to_string();
    }

    input
        .chars()
        .map(|ch| half_width(ch).unwrap_or(ch))
        .collect()
}
