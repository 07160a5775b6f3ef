//! Diagnostic rendering backends for human-readable output.

use crate::diagnostic::Diagnostic;

/// Trait for rendering diagnostics into formatted output strings.
///
/// Implementations format diagnostics for different output targets. The
/// source text the diagnostic refers to is passed alongside so renderers can
/// quote the offending line.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic, source_name: &str, source: &str) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// error[MISSING_SEMICOLON]: missing semicolon after declaration
///   --> counter.v:4:5
///   |
/// 4 |     reg [3:0] count
///   |     ^
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn severity_prefix(&self, diag: &Diagnostic) -> String {
        if self.color {
            let color_code = if diag.severity.is_error() { 31 } else { 33 };
            format!("\x1b[1;{}m{}\x1b[0m", color_code, diag.severity)
        } else {
            diag.severity.to_string()
        }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source_name: &str, source: &str) -> String {
        let mut out = String::new();

        // Header line: severity[CODE]: message
        out.push_str(&format!(
            "{}[{}]: {}\n",
            self.severity_prefix(diag),
            diag.code,
            diag.message
        ));

        // Location line
        out.push_str(&format!("  --> {}:{}\n", source_name, diag.position));

        // Source line with caret
        let line_idx = diag.position.line as usize - 1;
        if let Some(line_text) = source.lines().nth(line_idx) {
            let line_num = format!("{}", diag.position.line);
            let padding = " ".repeat(line_num.len());
            let col_padding = " ".repeat((diag.position.column as usize).saturating_sub(1));

            out.push_str(&format!("{padding} |\n"));
            out.push_str(&format!("{line_num} | {line_text}\n"));
            out.push_str(&format!("{padding} | {col_padding}^\n"));
        }

        out
    }
}
