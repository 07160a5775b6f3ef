//! missing-end: a `begin` block never balanced by `end`.

use veriscan_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use veriscan_source::Line;

use crate::{Lookahead, ScanRule};

/// Detects `begin` blocks left unbalanced by the end of the file.
///
/// Counting is purely textual from the triggering line to end-of-file:
/// `endmodule` and `endcase` contain `end` and count toward the balance,
/// and no nesting structure is tracked. This trades precision for speed.
pub struct MissingEnd;

impl MissingEnd {
    fn count_occurrences(text: &str, needle: &str) -> usize {
        text.matches(needle).count()
    }
}

impl ScanRule for MissingEnd {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::MissingEnd
    }

    fn name(&self) -> &str {
        "missing-end"
    }

    fn description(&self) -> &str {
        "'begin' block is never closed by 'end'"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_line(&self, line: &Line<'_>, lookahead: &Lookahead<'_>, sink: &DiagnosticSink) {
        let Some(at) = line.text.find("begin") else {
            return;
        };
        if line.text.contains("end") {
            return;
        }

        let mut begins = 0usize;
        let mut ends = 0usize;
        for l in lookahead.from_current() {
            begins += Self::count_occurrences(l.text, "begin");
            ends += Self::count_occurrences(l.text, "end");
        }

        if begins > ends {
            sink.emit(Diagnostic::error(
                self.code(),
                "'begin' block is never closed by 'end'",
                line.position_at(at),
            ));
        }
    }
}
