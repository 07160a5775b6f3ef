//! missing-endcase: a `case` statement never closed by `endcase`.

use veriscan_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
use veriscan_source::Line;

use crate::{Lookahead, ScanRule};

/// Detects `case` statements with no `endcase` on the same line or anywhere
/// in the remaining source.
///
/// Matching is deliberately substring-based, mirroring the scanner's other
/// forward lookaheads: an `endcase` inside a later comment or string still
/// satisfies the check.
pub struct MissingEndcase;

impl ScanRule for MissingEndcase {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::MissingEndcase
    }

    fn name(&self) -> &str {
        "missing-endcase"
    }

    fn description(&self) -> &str {
        "'case' statement is never closed by 'endcase'"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check_line(&self, line: &Line<'_>, lookahead: &Lookahead<'_>, sink: &DiagnosticSink) {
        let Some(at) = line.text.find("case") else {
            return;
        };
        if line.text.contains("endcase") {
            return;
        }
        let closed_later = lookahead.rest().iter().any(|l| l.text.contains("endcase"));
        if !closed_later {
            sink.emit(Diagnostic::error(
                self.code(),
                "'case' statement is never closed by 'endcase'",
                line.position_at(at),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScanEngine;
    use veriscan_config::LintConfig;

    fn scan(source: &str) -> Vec<Diagnostic> {
        let engine = ScanEngine::new(&LintConfig::default());
        let sink = DiagnosticSink::new();
        engine.run(source, &sink);
        sink.take_all()
            .into_iter()
            .filter(|d| d.code == DiagnosticCode::MissingEndcase)
            .collect()
    }

    #[test]
    fn unclosed_case_fires() {
        let diags = scan("case (x)\n  1'b0: y = 0;\n  1'b1: y = 1;\n");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].position.line, 1);
        assert_eq!(diags[0].severity, Severity::Error);
    }

    #[test]
    fn closed_case_is_clean() {
        assert!(scan("case (x)\n  default: y = 0;\nendcase\n").is_empty());
    }

    #[test]
    fn single_line_case_is_clean() {
        assert!(scan("case (x) default: y = 0; endcase\n").is_empty());
    }

    #[test]
    fn endcase_alone_does_not_fire() {
        // `endcase` contains the substring `case` but closes itself
        assert!(scan("endcase\n").is_empty());
    }

    #[test]
    fn casez_also_triggers() {
        // The trigger is textual: `casez`/`casex` contain `case`
        let diags = scan("casez (sel)\n  default: y = 0;\n");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn position_points_at_case() {
        let diags = scan("    case (x)\n");
        assert_eq!(diags[0].position.column, 5);
    }

    #[test]
    fn endcase_in_later_comment_satisfies_lookahead() {
        // Forward lookahead is purely textual, with no comment exclusion
        assert!(scan("case (x)\n// endcase\n").is_empty());
    }
}
