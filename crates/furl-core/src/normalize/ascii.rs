//! ASCII transliteration via Unicode decomposition.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Decomposes `text` (NFKD) and drops combining marks, so accented letters
/// fall back to their base letter ("é" -> "e", "Å" -> "A"). Characters with
/// no decomposition ("ß", CJK) pass through unchanged; the caller's scan
/// decides their fate.
pub(super) fn to_ascii(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}
