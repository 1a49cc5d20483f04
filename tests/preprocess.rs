//! Public API behaviour across recode, lowercasing and the text helpers.

use qprep::{
    PreprocessOptions, RECODE_TABLE, Splitter, find_unit_tokens, normalize, preprocess,
    preprocess_with, recode, split, trim_end, trim_end_chars,
};

/// Queries covering ASCII, full-width, mixed-script and unit-heavy input
const SAMPLES: &[&str] = &[
    "",
    "Download 5 MB now",
    "5MBs",
    "３２GB",
    "ＡＢＣ １２：３０ Ｋ",
    "Transfer 10 Mb/s OR 2 KB/s",
    "Über 7 G, 8 B und 9 kB.",
    "ΣΑΣ 3 GB",
    "東京 ２０ＧB、５ＭB",
    "  MB  K  5\tG\n",
];

#[test]
fn test_length_invariance() {
    for s in SAMPLES {
        let n = s.chars().count();
        assert_eq!(recode(s).chars().count(), n, "recode {s:?}");
        assert_eq!(normalize(s, true).chars().count(), n, "normalize {s:?}");
        assert_eq!(
            preprocess_with(s, PreprocessOptions::new().case_sensitive(true)).chars().count(),
            n,
            "preprocess {s:?}"
        );
    }
}

#[test]
fn test_recode_idempotent() {
    for s in SAMPLES {
        let once = recode(s);
        assert_eq!(recode(&once), once);
        assert!(!once.chars().any(|ch| RECODE_TABLE.iter().any(|(full, _)| *full == ch)));
    }
}

#[test]
fn test_full_lowercase_has_no_ascii_uppercase() {
    for s in SAMPLES.iter().filter(|s| s.is_ascii()) {
        let lowered = normalize(s, false);
        assert!(!lowered.chars().any(|c| c.is_ascii_uppercase()), "{lowered:?}");
        assert_eq!(lowered.to_lowercase(), lowered);
    }
}

#[test]
fn test_term_sensitive_round_trip() {
    for s in SAMPLES {
        assert_eq!(normalize(&normalize(s, true), false), normalize(s, false), "{s:?}");
    }
}

#[test]
fn test_term_sensitive_examples() {
    assert_eq!(normalize("Download 5 MB now", true), "download 5 MB now");
    assert_eq!(normalize("5MBs", true), "5mbs");
    assert_eq!(
        normalize("Transfer 10 Mb/s OR 2 KB/s", true),
        "transfer 10 Mb/s or 2 KB/s"
    );
    assert_eq!(normalize("Über 7 G, 8 B und 9 kB.", true), "über 7 G, 8 B und 9 kB.");
}

#[test]
fn test_no_tokens_equals_full_lowercase() {
    for s in ["Hello World", "MB first", "abcKB", "X-G"] {
        assert!(find_unit_tokens(s).is_empty(), "{s:?}");
        assert_eq!(normalize(s, true), normalize(s, false));
    }
}

#[test]
fn test_preprocess_pipeline() {
    assert_eq!(preprocess("東京 ２０ＧB、５ＭB"), "東京 20gb,5mb");
    assert_eq!(
        preprocess_with("東京 ２０ＧB、５ＭB", PreprocessOptions::new().case_sensitive(true)),
        "東京 20GB,5MB"
    );
    assert_eq!(
        preprocess_with("ＡＢＣ １２：３０ Ｋ", PreprocessOptions::new().case_sensitive(true)),
        "ａｂｃ 12:30 K"
    );
}

#[test]
fn test_trim_examples() {
    assert_eq!(trim_end("hello   "), "hello");
    assert_eq!(trim_end_chars("hello!!!", "!"), "hello");
    // Only ASCII whitespace is trimmed
    assert_eq!(trim_end("hello \t\r\n"), "hello");
    assert_eq!(trim_end("hello\u{3000}"), "hello\u{3000}");
    assert_eq!(trim_end("hello\u{a0}"), "hello\u{a0}");
}

#[test]
fn test_split_examples() {
    assert_eq!(split("a, b,,c", &[","]), vec!["a", " b", "c"]);

    let splitter = Splitter::new(&["、", "，"]).unwrap();
    assert_eq!(splitter.split("一、二，，三"), vec!["一", "二", "三"]);
}

#[test]
fn test_threads_share_statics() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let query = format!("Item {i} 5 MB");
                normalize(&query, true)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("item {i} 5 MB"));
    }
}
