//! Friendly-URL normalization.
//!
//! Turns free-form text (titles, paths, slug candidates) into canonical
//! URL-safe tokens: ASCII-only, lowercased, with every run of disallowed
//! characters collapsed to a single dash. All functions are pure and total;
//! every input, including empty and all-symbol strings, has a defined
//! output.

mod ascii;
mod encode;
mod pattern;

pub use encode::normalize_with_encoding;
pub use pattern::{compile_disallowed_pattern, normalize_with_pattern, PatternError};

/// Normalizes `text` into a friendly URL, keeping literal `.` and `/`.
///
/// Accented letters are transliterated to their ASCII base letter, uppercase
/// ASCII is lowercased, and anything outside `[a-z0-9_./]` becomes a dash.
/// Consecutive dashes collapse to one; a single leading dash is allowed.
///
/// Idempotent: re-normalizing an already normalized string is a no-op.
pub fn normalize(text: &str) -> String {
    normalize_ascii(text, false)
}

/// Normalizes `text` like [`normalize`], additionally replacing literal `.`
/// and `/` with dashes.
///
/// Use this where path traversal via literal dots and slashes must be
/// eliminated; the output never contains either character.
pub fn normalize_with_periods_and_slashes(text: &str) -> String {
    normalize_ascii(text, true)
}

/// Single-pass classify-and-collapse scan shared by the plain and strict
/// variants. The only scan state is whether the output already ends in a
/// dash, which is what collapses runs of different disallowed characters
/// (space, `#`, `@`, ...) into one dash.
fn normalize_ascii(text: &str, periods_and_slashes: bool) -> String {
    if text.is_empty() {
        return String::new();
    }

    let ascii = ascii::to_ascii(text);

    let mut out = String::with_capacity(ascii.len());
    for c in ascii.chars() {
        if c.is_ascii_uppercase() {
            out.push(c.to_ascii_lowercase());
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
            out.push(c);
        } else if !periods_and_slashes && (c == '/' || c == '.') {
            out.push(c);
        } else {
            push_collapsed_dash(&mut out);
        }
    }

    out
}

/// Appends a dash unless the output already ends in one. The check looks at
/// the output buffer, not the input, so any run of replaced input characters
/// yields exactly one dash.
fn push_collapsed_dash(out: &mut String) {
    if !out.ends_with('-') {
        out.push('-');
    }
}
