//! Scan engine that manages rule registration, configuration, and execution.
//!
//! The `ScanEngine` accepts a `LintConfig` to control which rules are denied,
//! allowed, or warned, then walks the source line-by-line running each
//! enabled rule.

use std::collections::HashSet;

use veriscan_config::LintConfig;
use veriscan_diagnostics::{DiagnosticSink, Severity};
use veriscan_source::split_lines;

use crate::rules::register_builtin_rules;
use crate::{Lookahead, ScanRule};

/// The engine that orchestrates running scan rules over source text.
///
/// Rules are registered at construction time. The engine respects the
/// `LintConfig` to suppress rules (allow), promote rules to errors (deny),
/// or keep them at their default severity.
pub struct ScanEngine {
    /// All registered scan rules.
    rules: Vec<Box<dyn ScanRule>>,
    /// Rule names that should be promoted to error severity.
    denied: HashSet<String>,
    /// Rule names that should be suppressed (not reported).
    allowed: HashSet<String>,
}

impl ScanEngine {
    /// Creates a new scan engine configured by the given `LintConfig`.
    ///
    /// All builtin rules are registered automatically. Rules listed in
    /// `config.deny` are promoted to error severity, and rules listed
    /// in `config.allow` are suppressed entirely.
    pub fn new(config: &LintConfig) -> Self {
        let denied: HashSet<String> = config.deny.iter().cloned().collect();
        let allowed: HashSet<String> = config.allow.iter().cloned().collect();

        let mut engine = Self {
            rules: Vec::new(),
            denied,
            allowed,
        };

        register_builtin_rules(&mut engine);
        engine
    }

    /// Creates a new scan engine with default configuration (no overrides).
    pub fn with_defaults() -> Self {
        Self::new(&LintConfig::default())
    }

    /// Registers a scan rule with the engine.
    pub fn register(&mut self, rule: Box<dyn ScanRule>) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all registered rules.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs all enabled rules over every scannable line of `source`.
    ///
    /// Blank lines and lines that open with a comment are skipped. For each
    /// remaining line, each registered rule is checked. If the rule's name is
    /// in the `allowed` set, it is skipped. If it's in the `denied` set,
    /// emitted diagnostics are promoted to error severity.
    ///
    /// Never fails: source with no triggering lines emits nothing.
    pub fn run(&self, source: &str, sink: &DiagnosticSink) {
        let lines = split_lines(source);

        for (index, line) in lines.iter().enumerate() {
            if line.is_blank() || line.is_comment() {
                continue;
            }
            let lookahead = Lookahead::new(&lines, index);

            for rule in &self.rules {
                if self.allowed.contains(rule.name()) {
                    continue;
                }

                // Use a temporary sink to capture and possibly promote diagnostics
                let temp_sink = DiagnosticSink::new();
                rule.check_line(line, &lookahead, &temp_sink);

                let is_denied = self.denied.contains(rule.name());
                for mut diag in temp_sink.take_all() {
                    if is_denied {
                        diag.severity = Severity::Error;
                    }
                    sink.emit(diag);
                }
            }
        }
    }
}
