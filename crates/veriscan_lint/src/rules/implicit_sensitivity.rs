//! implicit-sensitivity: `always @(*)`-style sensitivity lists.

use veriscan_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use veriscan_source::{find_word, Line};

use crate::{Lookahead, ScanRule};

/// Flags `always` blocks using a `*` wildcard sensitivity list.
pub struct ImplicitSensitivity;

impl ScanRule for ImplicitSensitivity {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::ImplicitSensitivity
    }

    fn name(&self) -> &str {
        "implicit-sensitivity"
    }

    fn description(&self) -> &str {
        "always block uses an implicit '*' sensitivity list"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_line(&self, line: &Line<'_>, _lookahead: &Lookahead<'_>, sink: &DiagnosticSink) {
        if let Some(at) = find_word(line.text, "always") {
            if line.text.contains('*') {
                sink.emit(Diagnostic::warning(
                    self.code(),
                    "implicit sensitivity list: prefer listing signals explicitly",
                    line.position_at(at),
                ));
            }
        }
    }
}
