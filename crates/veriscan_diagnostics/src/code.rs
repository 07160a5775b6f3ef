//! The stable diagnostic code taxonomy.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of diagnostic codes emitted by the analyzer.
///
/// Codes are the stable wire identifiers downstream consumers filter and
/// suppress by; their serialized form (`MISSING_SEMICOLON`, ...) must never
/// change once published.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    /// An `assign` whose target signal reappears on its own right-hand side.
    CombinationalLoop,
    /// A port declaration with neither `;` nor `,` termination.
    InvalidPortDeclaration,
    /// A `reg`/`wire`/`parameter`/`localparam` declaration without `;`.
    MissingSemicolon,
    /// An `always @(*)`-style implicit sensitivity list.
    ImplicitSensitivity,
    /// An `always` block with no `@` event control at all.
    PotentialLatch,
    /// A `case` statement never closed by `endcase`.
    MissingEndcase,
    /// A `begin` block never balanced by `end`.
    MissingEnd,
}

impl DiagnosticCode {
    /// Returns the stable identifier string for this code.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::CombinationalLoop => "COMBINATIONAL_LOOP",
            DiagnosticCode::InvalidPortDeclaration => "INVALID_PORT_DECLARATION",
            DiagnosticCode::MissingSemicolon => "MISSING_SEMICOLON",
            DiagnosticCode::ImplicitSensitivity => "IMPLICIT_SENSITIVITY",
            DiagnosticCode::PotentialLatch => "POTENTIAL_LATCH",
            DiagnosticCode::MissingEndcase => "MISSING_ENDCASE",
            DiagnosticCode::MissingEnd => "MISSING_END",
        }
    }

    /// Returns the severity this code carries by default.
    pub fn default_severity(self) -> Severity {
        match self {
            DiagnosticCode::CombinationalLoop
            | DiagnosticCode::ImplicitSensitivity
            | DiagnosticCode::PotentialLatch => Severity::Warning,
            DiagnosticCode::InvalidPortDeclaration
            | DiagnosticCode::MissingSemicolon
            | DiagnosticCode::MissingEndcase
            | DiagnosticCode::MissingEnd => Severity::Error,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
