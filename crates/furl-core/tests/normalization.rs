//! End-to-end normalization properties across all variants.
//!
//! Exercises the public API over a corpus of hostile inputs and pins the
//! invariants the callers rely on: collapsed dashes, idempotence, strict
//! mode excluding periods and slashes, and the encoding round-trip.

use furl_core::normalize::{
    compile_disallowed_pattern, normalize, normalize_with_encoding, normalize_with_pattern,
    normalize_with_periods_and_slashes,
};
use percent_encoding::percent_decode_str;

const CORPUS: &[&str] = &[
    "",
    "Hello World!",
    "A  B",
    "@#$%",
    "foo/bar.htm",
    "../../etc/passwd",
    "Crème Brûlée",
    "ÄÖÜ äöü ß",
    "price: £9.99 (sale!)",
    "—em–dash—",
    "“smart quotes”",
    "under_score-42",
    "日本語のタイトル",
    "  leading and trailing  ",
    "a/b/c/d",
    "-already-normalized-",
];

#[test]
fn no_output_ever_contains_consecutive_dashes() {
    for input in CORPUS {
        for output in [
            normalize(input),
            normalize_with_periods_and_slashes(input),
            normalize_with_encoding(input),
        ] {
            assert!(
                !output.contains("--"),
                "consecutive dashes in {output:?} (input {input:?})"
            );
        }
    }
}

#[test]
fn normalize_is_idempotent_over_corpus() {
    for input in CORPUS {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "input {input:?}");

        let strict = normalize_with_periods_and_slashes(input);
        assert_eq!(
            normalize_with_periods_and_slashes(&strict),
            strict,
            "input {input:?}"
        );
    }
}

#[test]
fn strict_output_never_contains_periods_or_slashes() {
    for input in CORPUS {
        let output = normalize_with_periods_and_slashes(input);
        assert!(
            !output.contains('.') && !output.contains('/'),
            "period or slash in {output:?} (input {input:?})"
        );
    }
}

#[test]
fn plain_output_may_keep_periods_and_slashes() {
    assert_eq!(normalize("docs/intro.html"), "docs/intro.html");
}

#[test]
fn encoded_output_decodes_to_the_collapsed_string() {
    // Segment-wise percent-decode of the output must give back the
    // dash-collapsed, pre-encoding form.
    let cases = [
        ("café park", "café-park"),
        ("100% on/5 stars", "100%-on/5-stars"),
        ("a b/c d", "a-b/c-d"),
        ("“quoted” text", "-quoted-text"),
    ];
    for (input, collapsed) in cases {
        let encoded = normalize_with_encoding(input);
        let decoded: Vec<String> = encoded
            .split('/')
            .map(|segment| {
                percent_decode_str(segment)
                    .decode_utf8()
                    .unwrap()
                    .into_owned()
            })
            .collect();
        assert_eq!(decoded.join("/"), collapsed, "input {input:?}");
    }
}

#[test]
fn uppercase_ascii_is_always_lowercased() {
    assert_eq!(normalize("ABC"), "abc");
    assert_eq!(normalize("Mixed CASE Title"), "mixed-case-title");
}

#[test]
fn all_symbol_input_collapses_fully() {
    assert_eq!(normalize("@#$%"), "-");
    assert_eq!(normalize_with_encoding("@# ["), "-");
}

#[test]
fn transliteration_golden_corpus_through_public_api() {
    assert_eq!(normalize("Crème Brûlée"), "creme-brulee");
    assert_eq!(normalize("Çå Ñoño"), "ca-nono");
    assert_eq!(normalize("naïve façade"), "naive-facade");
    // No decomposition available: collapses to a dash instead.
    assert_eq!(normalize("日本語のタイトル"), "-");
}

#[test]
fn pattern_variant_matches_fixed_variants_for_the_slug_alphabet() {
    let pattern = compile_disallowed_pattern("[^a-z0-9_/.-]").unwrap();
    for input in ["Hello World!", "A  B", "foo/bar.htm", "under_score-42"] {
        assert_eq!(
            normalize_with_pattern(input, &pattern),
            normalize(input),
            "input {input:?}"
        );
    }
}
