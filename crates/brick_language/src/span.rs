//! Source positions for tokens and syntax tree nodes.

use std::fmt;

/// A region of BrickLang source.
///
/// Byte offsets locate the text; `line` and `column` are the 1-based position
/// of its first character and are what diagnostics report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// 1-based line of the first character.
    pub line: u32,
    /// 1-based column of the first character.
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Creates an empty span at a line and column, for synthesized nodes.
    #[must_use]
    pub const fn at(line: u32, column: u32) -> Self {
        Self::new(0, 0, line, column)
    }

    /// Joins this span with a later one, keeping this span's position.
    #[must_use]
    pub const fn to(self, later: Self) -> Self {
        Self {
            start: self.start,
            end: later.end,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns true if the span covers no text.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the covered text.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
