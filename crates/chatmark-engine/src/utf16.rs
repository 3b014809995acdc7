//! Byte offset to UTF-16 code unit conversion.
//!
//! Entity offsets on the wire are counted in UTF-16 code units, while every
//! offset inside the engine is a byte offset into a `str`. The helpers here
//! re-encode prefixes of the text to translate between the two.

use crate::span::Span;

/// Rounds `idx` down to the nearest char boundary of `s`, clamping to `s.len()`.
pub fn floor_char_boundary(s: &str, idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    let mut i = idx;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Number of UTF-16 code units needed to encode `s[..byte_idx]`.
///
/// `byte_idx` is floored to a char boundary, so a mid-character offset counts
/// only the characters that end before it.
pub fn prefix_len(s: &str, byte_idx: usize) -> usize {
    let end = floor_char_boundary(s, byte_idx);
    s[..end].encode_utf16().count()
}

/// UTF-16 position of a byte span within `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16Range {
    pub offset: usize,
    pub len: usize,
}

impl Utf16Range {
    /// Converts a byte span over `s` into UTF-16 offset and length.
    pub fn of(s: &str, span: Span) -> Self {
        let offset = prefix_len(s, span.start);
        let end = prefix_len(s, span.end);
        Self {
            offset,
            len: end.saturating_sub(offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello", 3, 3)]
    #[case("héllo", 3, 3)]
    #[case("héllo", 2, 1)]
    #[case("日本", 4, 3)]
    #[case("abc", 99, 3)]
    #[case("", 0, 0)]
    fn floors_to_boundary(#[case] s: &str, #[case] idx: usize, #[case] expected: usize) {
        assert_eq!(floor_char_boundary(s, idx), expected);
    }

    #[test]
    fn ascii_prefix_matches_bytes() {
        assert_eq!(prefix_len("plain text", 5), 5);
    }

    #[test]
    fn multibyte_prefix_counts_code_units() {
        // "é" is 2 bytes, 1 code unit
        assert_eq!(prefix_len("é bold", 3), 2);
        // "😀" is 4 bytes, 2 code units (surrogate pair)
        assert_eq!(prefix_len("😀 bold", 5), 3);
    }

    #[test]
    fn range_over_astral_text() {
        let s = "x😀yz";
        let range = Utf16Range::of(s, Span::new(1, 6));
        assert_eq!(range, Utf16Range { offset: 1, len: 3 });
    }
}
