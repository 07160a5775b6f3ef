//! Merging the two analysis passes into one report.

use crate::report::{AnalysisReport, ModuleInfo};
use veriscan_diagnostics::Diagnostic;
use veriscan_extract::Extraction;

/// Merges structural extraction output and scanner diagnostics into a report.
///
/// Extraction diagnostics precede scanner diagnostics within each severity
/// class; within each source the original detection order is preserved. The
/// merger is the only place diagnostics are partitioned by severity, and the
/// module summary is built only when the extraction recognized a name.
pub fn merge(extraction: Extraction, scanned: Vec<Diagnostic>) -> AnalysisReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for diag in extraction
        .errors
        .into_iter()
        .chain(extraction.warnings)
        .chain(scanned)
    {
        if diag.severity.is_error() {
            errors.push(diag);
        } else {
            warnings.push(diag);
        }
    }

    let module_info = extraction.name.map(|name| ModuleInfo {
        name,
        port_count: extraction.ports.len(),
        signal_count: extraction.signals.len(),
        always_block_count: extraction.always_blocks.len(),
        assign_count: extraction.assigns.len(),
    });

    AnalysisReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        module_info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veriscan_diagnostics::{DiagnosticCode, Severity};
    use veriscan_source::SourcePosition;

    fn error_at(line: u32) -> Diagnostic {
        Diagnostic::error(
            DiagnosticCode::MissingSemicolon,
            "e",
            SourcePosition::new(line, 1),
        )
    }

    fn warning_at(line: u32) -> Diagnostic {
        Diagnostic::warning(
            DiagnosticCode::PotentialLatch,
            "w",
            SourcePosition::new(line, 1),
        )
    }

    #[test]
    fn empty_inputs_yield_valid_report() {
        let report = merge(Extraction::default(), Vec::new());
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert!(report.module_info.is_none());
    }

    #[test]
    fn partitions_by_severity() {
        let report = merge(
            Extraction::default(),
            vec![warning_at(1), error_at(2), warning_at(3)],
        );
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.errors.iter().all(|d| d.severity == Severity::Error));
        assert!(report
            .warnings
            .iter()
            .all(|d| d.severity == Severity::Warning));
    }

    #[test]
    fn errors_invalidate_report() {
        let report = merge(Extraction::default(), vec![error_at(1)]);
        assert!(!report.is_valid);
    }

    #[test]
    fn warnings_never_block_validity() {
        let report = merge(Extraction::default(), vec![warning_at(1), warning_at(2)]);
        assert!(report.is_valid);
    }

    #[test]
    fn module_info_requires_a_name() {
        let mut extraction = Extraction::default();
        extraction.signals.push(veriscan_extract::SignalDecl {
            kind: veriscan_extract::SignalKind::Wire,
            name: Some("w".to_string()),
            position: SourcePosition::START,
        });
        let report = merge(extraction, Vec::new());
        assert!(
            report.module_info.is_none(),
            "no module name means no module info, even with signals"
        );
    }

    #[test]
    fn module_info_counts_come_from_extraction() {
        let mut extraction = Extraction::default();
        extraction.name = Some("alu".to_string());
        extraction.signals.push(veriscan_extract::SignalDecl {
            kind: veriscan_extract::SignalKind::Reg,
            name: None,
            position: SourcePosition::START,
        });
        extraction.always_blocks.push(veriscan_extract::AlwaysBlock {
            position: SourcePosition::START,
        });
        let report = merge(extraction, Vec::new());
        let info = report.module_info.unwrap();
        assert_eq!(info.name, "alu");
        assert_eq!(info.port_count, 0);
        assert_eq!(info.signal_count, 1);
        assert_eq!(info.always_block_count, 1);
        assert_eq!(info.assign_count, 0);
    }

    #[test]
    fn extraction_diagnostics_precede_scanner_diagnostics() {
        let mut extraction = Extraction::default();
        extraction.errors.push(error_at(9));
        let report = merge(extraction, vec![error_at(1)]);
        assert_eq!(report.errors[0].position.line, 9);
        assert_eq!(report.errors[1].position.line, 1);
    }
}
