#![no_main]

use libfuzzer_sys::fuzz_target;
use qprep::PreprocessOptions;

fuzz_target!(|data: &str| {
    // Recoding and term-sensitive lowercasing never change the char count
    let n = data.chars().count();
    assert_eq!(qprep::recode(data).chars().count(), n);
    assert_eq!(qprep::to_lower_term_sensitive(data).chars().count(), n);

    let _ = qprep::preprocess(data);
    let _ = qprep::preprocess_with(data, PreprocessOptions::new().case_sensitive(true));
    let _ = qprep::trim_end(data);
});
