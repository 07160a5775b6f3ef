//! missing-semicolon: a declaration line with no `;` terminator.

use veriscan_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use veriscan_source::{find_word, Line};

use crate::{Lookahead, ScanRule};

/// Detects `reg`/`wire` and `parameter`/`localparam` declarations without `;`.
///
/// Both declaration families are checked independently and report the same
/// code; the column points at the triggering keyword.
pub struct MissingSemicolon;

impl MissingSemicolon {
    /// The earliest whole-word occurrence of any of `words` in the line.
    fn first_keyword(line: &str, words: &[&str]) -> Option<usize> {
        words.iter().filter_map(|w| find_word(line, w)).min()
    }
}

impl ScanRule for MissingSemicolon {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::MissingSemicolon
    }

    fn name(&self) -> &str {
        "missing-semicolon"
    }

    fn description(&self) -> &str {
        "declaration missing ';' terminator"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_line(&self, line: &Line<'_>, _lookahead: &Lookahead<'_>, sink: &DiagnosticSink) {
        if line.text.contains(';') {
            return;
        }

        if let Some(at) = Self::first_keyword(line.text, &["reg", "wire"]) {
            sink.emit(Diagnostic::error(
                self.code(),
                "signal declaration must end with ';'",
                line.position_at(at),
            ));
        }

        if let Some(at) = Self::first_keyword(line.text, &["parameter", "localparam"]) {
            sink.emit(Diagnostic::error(
                self.code(),
                "parameter declaration must end with ';'",
                line.position_at(at),
            ));
        }
    }
}
