use serde::{Deserialize, Serialize};

use crate::{markup::FormatKind, span::Span, utf16::Utf16Range};

/// One formatting span over plain (delimiter-stripped) text.
///
/// Carries both the byte span used internally and the UTF-16 position the
/// messaging wire format expects. The UTF-16 fields are computed against the
/// text the annotation was created for: the full plain text for tokenizer
/// output, the fragment text for remapped annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: FormatKind,
    pub span: Span,
    pub utf16_offset: usize,
    pub utf16_len: usize,
}

impl Annotation {
    /// Builds an annotation over `span` of `text`, deriving its UTF-16 position.
    pub fn new(kind: FormatKind, text: &str, span: Span) -> Self {
        let Utf16Range { offset, len } = Utf16Range::of(text, span);
        Self {
            kind,
            span,
            utf16_offset: offset,
            utf16_len: len,
        }
    }

    /// Byte length of the annotated span.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}
