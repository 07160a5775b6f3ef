//! Human-readable 1-based source coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position within source text, expressed in 1-based line/column coordinates.
///
/// Both `line` and `column` are always >= 1. Columns count bytes within the
/// physical line, which matches what editors display for ASCII-dominated HDL
/// source.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SourcePosition {
    /// The line number (1-indexed).
    pub line: u32,
    /// The column number (1-indexed).
    pub column: u32,
}

impl SourcePosition {
    /// The first position of any source text: line 1, column 1.
    pub const START: SourcePosition = SourcePosition { line: 1, column: 1 };

    /// Creates a new position from 1-based coordinates.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if either coordinate is zero.
    pub fn new(line: u32, column: u32) -> Self {
        debug_assert!(line >= 1, "line numbers are 1-based");
        debug_assert!(column >= 1, "column numbers are 1-based");
        Self { line, column }
    }

    /// Creates a position on the given line from a 0-based byte offset
    /// within that line.
    pub fn at_offset(line: u32, offset: usize) -> Self {
        Self::new(line, offset as u32 + 1)
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
