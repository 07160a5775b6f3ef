//! invalid-port-declaration: a port line with no `;` or `,` terminator.

use veriscan_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use veriscan_source::{contains_word, Line};

use crate::{Lookahead, ScanRule};

/// Detects `input`/`output` declarations terminated by neither `;` nor `,`.
///
/// No single token is blamable for a missing terminator, so the diagnostic
/// reports column 1.
pub struct InvalidPortDeclaration;

impl ScanRule for InvalidPortDeclaration {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::InvalidPortDeclaration
    }

    fn name(&self) -> &str {
        "invalid-port-declaration"
    }

    fn description(&self) -> &str {
        "port declaration missing ';' or ',' terminator"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_line(&self, line: &Line<'_>, _lookahead: &Lookahead<'_>, sink: &DiagnosticSink) {
        let has_port_keyword =
            contains_word(line.text, "input") || contains_word(line.text, "output");
        if has_port_keyword && !line.text.contains(';') && !line.text.contains(',') {
            sink.emit(Diagnostic::error(
                self.code(),
                "port declaration must end with ';' or ','",
                line.start(),
            ));
        }
    }
}
