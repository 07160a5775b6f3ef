//! potential-latch: `always` blocks with no event control at all.

use veriscan_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use veriscan_source::{find_word, Line};

use crate::{Lookahead, ScanRule};

/// Flags `always` blocks without an `@` event control, which commonly infer
/// unintended latches in synthesis.
pub struct PotentialLatch;

impl ScanRule for PotentialLatch {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::PotentialLatch
    }

    fn name(&self) -> &str {
        "potential-latch"
    }

    fn description(&self) -> &str {
        "always block without event control may infer a latch"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_line(&self, line: &Line<'_>, _lookahead: &Lookahead<'_>, sink: &DiagnosticSink) {
        if let Some(at) = find_word(line.text, "always") {
            if !line.text.contains('@') {
                sink.emit(Diagnostic::warning(
                    self.code(),
                    "always block without event control may infer a latch",
                    line.position_at(at),
                ));
            }
        }
    }
}
