//! Normalization against a caller-supplied disallowed-character pattern.

use regex::Regex;
use thiserror::Error;

/// A disallowed-character pattern (CLI flag or config file) that is not a
/// valid regex.
#[derive(Debug, Error)]
#[error("invalid disallowed-character pattern {pattern:?}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

/// Compiles a disallowed-character pattern for [`normalize_with_pattern`].
pub fn compile_disallowed_pattern(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError {
        pattern: pattern.to_string(),
        source,
    })
}

/// Normalizes `text`, replacing every match of `disallowed` with a dash.
///
/// The input is ASCII-lowercased and transliterated first, then pattern
/// matches become dashes and consecutive dashes collapse to one. The caller
/// chooses what "disallowed" means; a pattern like `[^a-z0-9_-]` reproduces
/// the usual slug alphabet.
pub fn normalize_with_pattern(text: &str, disallowed: &Regex) -> String {
    if text.is_empty() {
        return String::new();
    }

    let ascii = super::ascii::to_ascii(&text.to_ascii_lowercase());
    let replaced = disallowed.replace_all(&ascii, "-");

    let mut out = String::with_capacity(replaced.len());
    for c in replaced.chars() {
        if c == '-' {
            super::push_collapsed_dash(&mut out);
        } else {
            out.push(c);
        }
    }

    out
}
