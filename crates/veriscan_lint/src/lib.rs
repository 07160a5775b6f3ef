//! Line-oriented diagnostic scanning for Verilog source text.
//!
//! This crate implements the second analysis pass: a fixed battery of
//! structural and style rules applied line-by-line over the full input.
//! Each rule is an independent [`ScanRule`] with a stable diagnostic code;
//! the [`ScanEngine`] runs all registered rules, skipping blank and
//! pure-comment lines, and honors allow/deny configuration by rule name.
//!
//! # Rule Design
//!
//! Rules are intentionally cheap, local heuristics rather than a grammar:
//! the goal is fast, incremental feedback in an editor context. Two rules
//! (`missing-endcase`, `missing-end`) look ahead over the remaining lines
//! through the [`Lookahead`] handle; that lookahead is purely textual, with
//! no comment or string exclusion and no nesting awareness.

#![warn(missing_docs)]

mod engine;
pub mod rules;

pub use engine::ScanEngine;
pub use rules::register_builtin_rules;
pub use rules::{
    CombinationalLoop, ImplicitSensitivity, InvalidPortDeclaration, MissingEnd, MissingEndcase,
    MissingSemicolon, PotentialLatch,
};

use veriscan_diagnostics::{DiagnosticCode, DiagnosticSink, Severity};
use veriscan_source::Line;

/// A single scan rule that checks one line for an issue.
///
/// Each rule has a stable diagnostic code, a short kebab-case name used for
/// allow/deny configuration, a description, and a default severity. The
/// `check_line` method is called once per scannable line and should emit
/// diagnostics via the provided sink.
pub trait ScanRule: Send + Sync {
    /// Returns the diagnostic code emitted by this rule.
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule (e.g. "missing-semicolon").
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Returns the default severity for diagnostics emitted by this rule.
    fn default_severity(&self) -> Severity;

    /// Checks a single line and emits diagnostics to the sink.
    fn check_line(&self, line: &Line<'_>, lookahead: &Lookahead<'_>, sink: &DiagnosticSink);
}

/// Forward view over the source for rules that need to scan ahead.
///
/// Holds all physical lines plus the index of the line currently being
/// checked. The view is purely textual: comment and string content in later
/// lines is visible to lookahead scans.
pub struct Lookahead<'a> {
    lines: &'a [Line<'a>],
    index: usize,
}

impl<'a> Lookahead<'a> {
    /// Creates a lookahead positioned at `index` within `lines`.
    pub fn new(lines: &'a [Line<'a>], index: usize) -> Self {
        Self { lines, index }
    }

    /// The lines after the current one, in order.
    pub fn rest(&self) -> &[Line<'a>] {
        &self.lines[(self.index + 1).min(self.lines.len())..]
    }

    /// The current line and everything after it, in order.
    pub fn from_current(&self) -> &[Line<'a>] {
        &self.lines[self.index.min(self.lines.len())..]
    }
}
