//! Byte-offset to line/column conversion.

pub use text_size::{TextRange, TextSize};

use super::Position;

/// A 1-based line/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

/// Precomputed line starts for a source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (idx, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(idx as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a line/column pair.
    ///
    /// Offsets past the end of the text clamp to the end.
    pub fn line_col(&self, text: &str, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = usize::from(self.line_starts[line]);
        let end = usize::from(offset);
        let col = text.get(start..end).map_or(end - start, |s| s.chars().count());
        LineCol {
            line: line + 1,
            col: col + 1,
        }
    }

    /// Full position (line, column and offset) for a byte offset
    pub fn position(&self, text: &str, offset: TextSize) -> Position {
        let lc = self.line_col(text, offset);
        Position::new(lc.line, lc.col, offset.min(self.len))
    }
}
