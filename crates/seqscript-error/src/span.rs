//! Span - source code location
//!
//! A Span marks a region of the input, used to point structural
//! errors at the offending line.

/// A position in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line (1-indexed)
    pub line: u32,
    /// Column (1-indexed)
    pub column: u32,
    /// Byte offset from the start of the input
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

/// A region of the input (start to end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position
    pub start: Position,
    /// End position
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates a span from a single position
    pub fn point(pos: Position) -> Self {
        Self { start: pos, end: pos }
    }

    /// Combines two spans into one covering both
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: if self.start.offset < other.start.offset {
                self.start
            } else {
                other.start
            },
            end: if self.end.offset > other.end.offset {
                self.end
            } else {
                other.end
            },
        }
    }

    /// Returns the length in bytes
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Checks if the span is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge() {
        let span1 = Span::new(Position::new(1, 1, 0), Position::new(1, 6, 5));
        let span2 = Span::new(Position::new(1, 10, 9), Position::new(1, 12, 11));

        let merged = span1.merge(span2);
        assert_eq!(merged.start.offset, 0);
        assert_eq!(merged.end.offset, 11);
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(Position::new(2, 1, 10), Position::new(2, 5, 14));
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::point(Position::new(2, 1, 10)).is_empty());
    }
}
