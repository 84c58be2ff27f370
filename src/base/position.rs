//! Position tracking for entities
//!
//! Stores the source location (line/column/byte offset) of parsed entities so
//! a formatter can splice regenerated comments without touching other text.

use text_size::TextSize;

/// A span representing a range in source code.
///
/// `end` is exclusive: it is the position just after the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (1-based line and column, 0-based byte offset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: TextSize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: TextSize::new(0),
        }
    }
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates (offsets left at zero)
    pub fn from_coords(
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_col, TextSize::new(0)),
            end: Position::new(end_line, end_col, TextSize::new(0)),
        }
    }

    /// Check if a position falls within this span
    pub fn contains(&self, position: Position) -> bool {
        if position.line < self.start.line || position.line > self.end.line {
            return false;
        }
        if position.line == self.start.line && position.column < self.start.column {
            return false;
        }
        if position.line == self.end.line && position.column > self.end.column {
            return false;
        }
        true
    }

    /// Byte range covered by this span
    pub fn text_range(&self) -> text_size::TextRange {
        text_size::TextRange::new(self.start.offset, self.end.offset.max(self.start.offset))
    }

    /// Slice the covered text out of `source`
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        let range = self.text_range();
        source
            .get(usize::from(range.start())..usize::from(range.end()))
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset >= self.end.offset
    }
}

impl Position {
    pub fn new(line: usize, column: usize, offset: TextSize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}
