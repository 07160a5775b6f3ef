//! Source text primitives for line-oriented Verilog scanning.
//!
//! This crate provides the foundations both analysis passes are built on:
//! 1-based [`SourcePosition`] coordinates, physical [`Line`] splitting,
//! comment masking that blanks `//` and `/* ... */` content while preserving
//! byte offsets, and whole-word keyword scanning over line text.

#![warn(missing_docs)]

pub mod lines;
pub mod mask;
pub mod position;
pub mod words;

pub use lines::{split_lines, Line};
pub use mask::mask_comments;
pub use position::SourcePosition;
pub use words::{contains_word, find_word, find_word_from, ident_at, is_ident_byte, word_positions};
