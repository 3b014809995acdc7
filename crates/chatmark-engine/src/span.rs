use serde::{Deserialize, Serialize};

/// A byte range `[start, end)` into a plain-text buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Intersects this span with `other`, treating both bounds as inclusive.
    ///
    /// Returns `None` only when the spans are disjoint. A span that merely
    /// touches an edge of `other`, or an empty span inside it, clips to an
    /// empty span at that position.
    #[must_use]
    pub fn clip_to(self, other: Span) -> Option<Span> {
        if self.start > other.end || self.end < other.start {
            return None;
        }
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        Some(Span { start, end })
    }

    /// Shifts both bounds down by `base`, saturating at zero.
    #[must_use]
    pub fn rebase(self, base: usize) -> Span {
        Span {
            start: self.start.saturating_sub(base),
            end: self.end.saturating_sub(base),
        }
    }
}
