//! The merged analysis report returned to callers.

use serde::{Deserialize, Serialize};
use veriscan_diagnostics::Diagnostic;

/// A module's structural summary.
///
/// Present in a report only when a `module <identifier>` declaration was
/// recognized; counts equal the literal counts of matching declarations.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    /// The declared module name.
    pub name: String,
    /// Number of recognized port declarations.
    pub port_count: usize,
    /// Number of recognized signal declarations.
    pub signal_count: usize,
    /// Number of `always` block occurrences.
    pub always_block_count: usize,
    /// Number of `assign` statement occurrences.
    pub assign_count: usize,
}

/// The complete result of analyzing one source text.
///
/// `errors` holds only error-severity diagnostics and `warnings` only
/// warning-severity ones; `is_valid` is true exactly when `errors` is empty.
/// Warnings never affect validity.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Error diagnostics, in detection order.
    pub errors: Vec<Diagnostic>,
    /// Warning diagnostics, in detection order.
    pub warnings: Vec<Diagnostic>,
    /// Whether the source passed: no errors were detected.
    pub is_valid: bool,
    /// The module summary, when a module declaration was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_info: Option<ModuleInfo>,
}

impl AnalysisReport {
    /// Total number of diagnostics of either severity.
    pub fn diagnostic_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}
