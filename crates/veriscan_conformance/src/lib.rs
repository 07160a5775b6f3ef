//! Shared helpers for Veriscan conformance tests.
//!
//! The integration tests in `tests/` exercise the full extract + scan +
//! merge pipeline over realistic Verilog sources. This crate provides small
//! assertions over the resulting reports.

#![warn(missing_docs)]

use veriscan_analyzer::AnalysisReport;
use veriscan_diagnostics::DiagnosticCode;

/// Analyzes source with the default configuration.
pub fn analyze(source: &str) -> AnalysisReport {
    veriscan_analyzer::analyze(source)
}

/// Returns `true` if the report contains an error with the given code.
pub fn has_error(report: &AnalysisReport, code: DiagnosticCode) -> bool {
    report.errors.iter().any(|d| d.code == code)
}

/// Returns `true` if the report contains a warning with the given code.
pub fn has_warning(report: &AnalysisReport, code: DiagnosticCode) -> bool {
    report.warnings.iter().any(|d| d.code == code)
}

/// Returns the lines on which an error with the given code was reported.
pub fn error_lines(report: &AnalysisReport, code: DiagnosticCode) -> Vec<u32> {
    report
        .errors
        .iter()
        .filter(|d| d.code == code)
        .map(|d| d.position.line)
        .collect()
}
