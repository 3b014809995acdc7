use crate::{annotation::Annotation, span::Span, utf16};

use super::{cursor::Cursor, kinds::FormatKind, prefix::match_delimiter};

/// Plain text with the formatting spans extracted from its markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokenized {
    pub plain: String,
    /// Ordered by the position of each span's closing delimiter.
    pub annotations: Vec<Annotation>,
}

/// An opened delimiter waiting for its closer.
#[derive(Debug, Clone, Copy)]
struct OpenTag {
    kind: FormatKind,
    /// Length of the plain-text output when the tag was opened.
    offset: usize,
}

/// Strips markup delimiters from `input` and records the spans they enclose.
///
/// Total over every input. Recovery rules for unbalanced markup:
/// - A delimiter closes the nearest open tag of the same kind. Tags opened
///   after that one are abandoned and their delimiters are written back into
///   the plain text as literals, oldest first, each at the offset recorded
///   when it was opened. Those offsets are not shifted by the reinsertions
///   that precede them in the same step.
/// - A delimiter with no open tag of its kind opens a new tag.
/// - Tags still open at end of input are dropped along with their delimiters.
pub fn tokenize(input: &str) -> Tokenized {
    let mut cur = Cursor::new(input);
    let mut plain = String::with_capacity(input.len());
    let mut stack: Vec<OpenTag> = Vec::new();
    let mut annotations = Vec::new();

    while !cur.eof() {
        let Some(kind) = match_delimiter(cur.rest()) else {
            if let Some(c) = cur.bump_char() {
                plain.push(c);
            }
            continue;
        };
        cur.bump_n(kind.delimiter().len());

        let Some(j) = stack.iter().rposition(|tag| tag.kind == kind) else {
            stack.push(OpenTag {
                kind,
                offset: plain.len(),
            });
            continue;
        };

        let opened = stack[j].offset;
        for unclosed in stack.drain(j..).skip(1) {
            reinsert_literal(&mut plain, unclosed);
        }
        let span = Span::new(opened, plain.len());
        annotations.push(Annotation::new(kind, &plain, span));
    }

    if !stack.is_empty() {
        log::trace!("dropping {} unclosed delimiter(s) at end of input", stack.len());
    }

    Tokenized { plain, annotations }
}

/// Writes an abandoned tag's delimiter back into `plain` at its recorded offset.
///
/// Earlier reinsertions in the same step can leave the recorded offset inside
/// a multi-byte character; it is floored to the preceding char boundary.
fn reinsert_literal(plain: &mut String, tag: OpenTag) {
    let at = utf16::floor_char_boundary(plain, tag.offset);
    log::trace!("reinserting unclosed {:?} delimiter at byte {at}", tag.kind);
    plain.insert_str(at, tag.kind.delimiter());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ann(kind: FormatKind, text: &str, start: usize, end: usize) -> Annotation {
        Annotation::new(kind, text, Span::new(start, end))
    }

    #[test]
    fn unmarked_text_round_trips() {
        let out = tokenize("just some text, with * and _ and ~ alone");
        assert_eq!(out.plain, "just some text, with * and _ and ~ alone");
        assert!(out.annotations.is_empty());
    }

    #[test]
    fn empty_input() {
        assert_eq!(tokenize(""), Tokenized::default());
    }

    #[test]
    fn balanced_bold() {
        let out = tokenize("a **bold** b");
        assert_eq!(out.plain, "a bold b");
        assert_eq!(out.annotations, vec![ann(FormatKind::Bold, "a bold b", 2, 6)]);
        assert_eq!(&out.plain[2..6], "bold");
    }

    #[test]
    fn unmatched_trailing_open_is_dropped() {
        let out = tokenize("a **b");
        assert_eq!(out.plain, "a b");
        assert!(out.annotations.is_empty());
    }

    #[test]
    fn interleaved_mismatch_reinserts_literal() {
        let out = tokenize("**a __b** c__");
        assert_eq!(out.plain, "a __b c");
        assert_eq!(out.annotations, vec![ann(FormatKind::Bold, "a __b c", 0, 5)]);
    }

    #[test]
    fn nested_spans_close_inner_first() {
        let out = tokenize("**a __b__ c**");
        assert_eq!(out.plain, "a b c");
        assert_eq!(
            out.annotations,
            vec![
                ann(FormatKind::Italic, "a b c", 2, 3),
                ann(FormatKind::Bold, "a b c", 0, 5),
            ]
        );
    }

    #[test]
    fn fence_beats_backtick() {
        let out = tokenize("```let x = 1;```");
        assert_eq!(out.plain, "let x = 1;");
        assert_eq!(out.annotations, vec![ann(FormatKind::Pre, "let x = 1;", 0, 10)]);
    }

    #[test]
    fn double_backtick_is_two_empty_code_spans() {
        let out = tokenize("``x``");
        assert_eq!(out.plain, "x");
        assert_eq!(
            out.annotations,
            vec![ann(FormatKind::Code, "x", 0, 0), ann(FormatKind::Code, "x", 1, 1)]
        );
    }

    #[test]
    fn empty_pair_yields_empty_annotation() {
        let out = tokenize("a****b");
        assert_eq!(out.plain, "ab");
        assert_eq!(out.annotations, vec![ann(FormatKind::Bold, "ab", 1, 1)]);
    }

    #[test]
    fn multi_level_mismatch_uses_recorded_offsets() {
        // The `~~` offset was recorded before `__` was written back, so it
        // lands two bytes earlier than where it was typed.
        let out = tokenize("**a __b ~~c** d");
        assert_eq!(out.plain, "a __~~b c d");
        assert_eq!(
            out.annotations,
            vec![ann(FormatKind::Bold, "a __~~b c d", 0, 9)]
        );
    }

    #[test]
    fn utf16_offset_counts_code_units() {
        let out = tokenize("привет **мир**");
        assert_eq!(out.plain, "привет мир");
        let bold = out.annotations[0];
        assert_eq!(bold.span, Span::new(13, 19));
        assert_eq!(bold.utf16_offset, 7);
        assert_eq!(bold.utf16_len, 3);
    }

    #[test]
    fn surrogate_pairs_count_twice() {
        let out = tokenize("😀 `x`");
        let code = out.annotations[0];
        assert_eq!(code.span, Span::new(5, 6));
        assert_eq!(code.utf16_offset, 3);
        assert_eq!(code.utf16_len, 1);
    }

    #[test]
    fn stale_offset_inside_multibyte_char_is_floored() {
        // `__` goes back in at byte 2, shifting "é" so that the recorded
        // `~~` offset (5) now points into its second byte.
        let out = tokenize("**x __é ~~y** z");
        assert_eq!(out.plain, "x __~~é y z");
        assert_eq!(out.annotations.len(), 1);
        assert_eq!(out.annotations[0].kind, FormatKind::Bold);
    }
}
