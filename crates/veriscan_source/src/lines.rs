//! Physical line splitting with 1-based numbering.

use crate::position::SourcePosition;

/// A single physical line of source text.
///
/// Lines are numbered from 1 and keep a borrowed slice of the original text
/// with the trailing newline (and any `\r`) removed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Line<'a> {
    /// The 1-based physical line number.
    pub number: u32,
    /// The line content, without the line terminator.
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Returns `true` if the line is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Returns `true` if the trimmed line starts a comment (`//` or `/*`).
    ///
    /// This is the skip test used by the line-oriented scanner; it does not
    /// track block-comment state across lines.
    pub fn is_comment(&self) -> bool {
        let trimmed = self.text.trim_start();
        trimmed.starts_with("//") || trimmed.starts_with("/*")
    }

    /// Converts a 0-based byte offset within this line into a [`SourcePosition`].
    pub fn position_at(&self, offset: usize) -> SourcePosition {
        SourcePosition::at_offset(self.number, offset)
    }

    /// The position of the first column of this line.
    pub fn start(&self) -> SourcePosition {
        SourcePosition::new(self.number, 1)
    }
}

/// Splits source text into physical lines, numbering them from 1.
///
/// Handles both `\n` and `\r\n` terminators. The empty string yields no lines.
pub fn split_lines(source: &str) -> Vec<Line<'_>> {
    source
        .lines()
        .enumerate()
        .map(|(i, text)| Line {
            number: i as u32 + 1,
            text,
        })
        .collect()
}
