/// A byte range `[start, end)` into a single logical line.
///
/// Inline nodes store spans rather than copied text; slicing the line with
/// any span reproduces the exact source bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
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

    /// Length in bytes; zero for inverted spans.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Slices `line` with this span.
    ///
    /// Returns an empty string when the span is out of bounds or does not
    /// fall on character boundaries.
    #[must_use]
    pub fn slice(self, line: &str) -> &str {
        line.get(self.start..self.end).unwrap_or("")
    }
}
