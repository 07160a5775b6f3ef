//! The public analysis entry point.
//!
//! Runs both analysis passes over a source text and merges their results
//! into a single [`AnalysisReport`]:
//!
//! 1. Structural extraction (`veriscan_extract`) recovers the module name
//!    and declaration counts.
//! 2. Diagnostic scanning (`veriscan_lint`) applies the fixed rule battery.
//!
//! The two passes are independent: neither consumes the other's output, and
//! both receive the raw source text. Analysis is pure and synchronous; it
//! never fails for any input text, however malformed the Verilog is.

#![warn(missing_docs)]

mod merge;
mod report;

pub use merge::merge;
pub use report::{AnalysisReport, ModuleInfo};

use veriscan_config::LintConfig;
use veriscan_diagnostics::DiagnosticSink;
use veriscan_lint::ScanEngine;

/// Analyzes `source` with the default rule configuration.
pub fn analyze(source: &str) -> AnalysisReport {
    analyze_with_config(source, &LintConfig::default())
}

/// Analyzes `source`, honoring the given lint configuration.
///
/// Rules named in `config.allow` are suppressed; rules named in
/// `config.deny` have their diagnostics promoted to errors.
pub fn analyze_with_config(source: &str, config: &LintConfig) -> AnalysisReport {
    let extraction = veriscan_extract::extract(source);

    let engine = ScanEngine::new(config);
    let sink = DiagnosticSink::new();
    engine.run(source, &sink);

    merge(extraction, sink.take_all())
}
