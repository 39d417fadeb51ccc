//! Replacement-table normalization and percent-encoded form.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters replaced by a dash before encoding. Sorted by code point for
/// binary search.
const REPLACE_CHARS: [char; 30] = [
    ' ', '!', '"', '#', '$', '&', '\'', '(', ')', '+', ',', '-', ':', ';', '=', '?', '@', '[',
    '\\', ']', '{', '}', '~', '\u{a3}', '\u{2013}', '\u{2014}', '\u{2018}', '\u{2019}',
    '\u{201c}', '\u{201d}',
];

/// Everything outside `[A-Za-z0-9._*-]` is percent-encoded. Space encodes as
/// `%20`, never `+`; spaces are in the replacement table and collapse to a
/// dash before encoding, so none survive to this stage.
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*');

fn is_replace_char(c: char) -> bool {
    REPLACE_CHARS.binary_search(&c).is_ok()
}

/// Normalizes `text` for use as an encoded friendly-URL path.
///
/// Each character in the replacement table (space, punctuation, quotes,
/// brackets, currency and typographic dashes) becomes a dash, collapsed so
/// no two dashes are ever adjacent. The result is then split on `/` and
/// every segment is percent-encoded independently as UTF-8 before
/// rejoining. Case and non-ASCII letters are preserved; they come out
/// percent-encoded rather than transliterated.
pub fn normalize_with_encoding(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut collapsed = String::with_capacity(text.len());
    for c in text.chars() {
        if is_replace_char(c) {
            super::push_collapsed_dash(&mut collapsed);
        } else {
            collapsed.push(c);
        }
    }

    let segments: Vec<String> = collapsed
        .split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string())
        .collect();

    segments.join("/")
}
