use crate::{assemble::Fragment, markup::Tokenized, utf16::Utf16Range};

/// Panics if any tokenizer annotation falls outside the plain text.
pub fn check_tokenized(tokenized: &Tokenized) {
    let n = tokenized.plain.len();
    for a in &tokenized.annotations {
        assert!(
            a.span.start <= a.span.end && a.span.end <= n,
            "annotation span out of bounds: {:?} (plain len: {})",
            a.span,
            n
        );
    }
}

/// Panics unless `fragments` partition `plain` and every annotation is
/// contained in its fragment with a UTF-16 position matching its byte span.
pub fn check_fragments(plain: &str, fragments: &[Fragment]) {
    let joined: String = fragments.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(joined, plain, "fragments do not reassemble the plain text");

    for (i, f) in fragments.iter().enumerate() {
        assert!(!f.text.is_empty(), "fragment {i} is empty");
        for a in &f.annotations {
            assert!(
                a.span.start <= a.span.end && a.span.end <= f.text.len(),
                "fragment {i} annotation out of bounds: {:?} (fragment len: {})",
                a.span,
                f.text.len()
            );
            let expected = Utf16Range::of(&f.text, a.span);
            assert_eq!(
                (a.utf16_offset, a.utf16_len),
                (expected.offset, expected.len),
                "fragment {i} annotation has stale UTF-16 position: {a:?}"
            );
        }
    }
}
