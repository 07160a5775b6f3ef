//! Structured diagnostic messages with severity, code, and position.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use veriscan_source::SourcePosition;

/// A single reported error or warning with position and message.
///
/// Diagnostics are immutable once produced and are collected in detection
/// order. The position is flattened during serialization so consumers see
/// `{ line, column, message, severity, code }`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Where in the source the issue was detected (1-based).
    #[serde(flatten)]
    pub position: SourcePosition,
    /// The main diagnostic message.
    pub message: String,
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The stable code identifying the type of diagnostic.
    pub code: DiagnosticCode,
}

impl Diagnostic {
    /// Creates a new error diagnostic with the given code, message, and position.
    pub fn error(code: DiagnosticCode, message: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            position,
            message: message.into(),
            severity: Severity::Error,
            code,
        }
    }

    /// Creates a new warning diagnostic with the given code, message, and position.
    pub fn warning(
        code: DiagnosticCode,
        message: impl Into<String>,
        position: SourcePosition,
    ) -> Self {
        Self {
            position,
            message: message.into(),
            severity: Severity::Warning,
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_error() {
        let diag = Diagnostic::error(
            DiagnosticCode::MissingSemicolon,
            "missing semicolon after declaration",
            SourcePosition::new(4, 1),
        );
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.code, DiagnosticCode::MissingSemicolon);
        assert_eq!(diag.position.line, 4);
    }

    #[test]
    fn create_warning() {
        let diag = Diagnostic::warning(
            DiagnosticCode::PotentialLatch,
            "always block without event control",
            SourcePosition::new(9, 3),
        );
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.position.column, 3);
    }

    #[test]
    fn serializes_with_flattened_position() {
        let diag = Diagnostic::warning(
            DiagnosticCode::ImplicitSensitivity,
            "implicit sensitivity list",
            SourcePosition::new(2, 5),
        );
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["line"], 2);
        assert_eq!(json["column"], 5);
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["code"], "IMPLICIT_SENSITIVITY");
        assert_eq!(json["message"], "implicit sensitivity list");
    }

    #[test]
    fn deserializes_from_flat_form() {
        let json = r#"{"line":7,"column":2,"message":"m","severity":"error","code":"MISSING_END"}"#;
        let diag: Diagnostic = serde_json::from_str(json).unwrap();
        assert_eq!(diag.position, SourcePosition::new(7, 2));
        assert_eq!(diag.code, DiagnosticCode::MissingEnd);
    }
}
