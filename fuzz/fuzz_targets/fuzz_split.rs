#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct SplitInput<'a> {
    text: &'a str,
    delimiters: Vec<&'a str>,
    trim_chars: &'a str,
}

fuzz_target!(|input: SplitInput<'_>| {
    // Arbitrary delimiters are escaped, so every delimiter list is accepted
    let parts = qprep::split(input.text, &input.delimiters);
    assert!(parts.iter().all(|p| !p.is_empty()));
    let _ = qprep::trim_end_chars(input.text, input.trim_chars);
});
