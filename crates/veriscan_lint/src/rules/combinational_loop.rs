//! combinational-loop: an assign target that feeds back into its own RHS.

use veriscan_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use veriscan_source::{find_word, find_word_from, ident_at, Line};

use crate::{Lookahead, ScanRule};

/// Detects `assign <sig> = ...` where `<sig>` reappears later on the same line.
///
/// A heuristic, not a true dependency analysis: it operates on single-line
/// text only and does not know about bit selects or conditional operands.
pub struct CombinationalLoop;

impl ScanRule for CombinationalLoop {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::CombinationalLoop
    }

    fn name(&self) -> &str {
        "combinational-loop"
    }

    fn description(&self) -> &str {
        "assign target appears on its own right-hand side"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_line(&self, line: &Line<'_>, _lookahead: &Lookahead<'_>, sink: &DiagnosticSink) {
        let Some(assign_at) = find_word(line.text, "assign") else {
            return;
        };

        // Target identifier directly after `assign`
        let bytes = line.text.as_bytes();
        let mut pos = assign_at + "assign".len();
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        let Some(target) = ident_at(line.text, pos) else {
            return;
        };

        // The pattern only covers plain `assign <sig> = ...` targets
        let mut eq = pos + target.len();
        while eq < bytes.len() && bytes[eq].is_ascii_whitespace() {
            eq += 1;
        }
        if bytes.get(eq) != Some(&b'=') {
            return;
        }

        if find_word_from(line.text, target, pos + target.len()).is_some() {
            sink.emit(Diagnostic::warning(
                self.code(),
                format!("possible combinational loop: '{target}' is assigned from itself"),
                line.position_at(assign_at),
            ));
        }
    }
}
