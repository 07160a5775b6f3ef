//! The structural extraction pass.

use crate::decl::{
    AlwaysBlock, AssignStatement, PortDecl, PortDirection, SignalDecl, SignalKind,
};
use veriscan_diagnostics::Diagnostic;
use veriscan_source::{ident_at, mask_comments, split_lines, word_positions, Line};

/// The result of structural extraction over one source text.
///
/// `errors` and `warnings` are part of the merge contract with the report
/// layer; the current extraction rules never emit any (a source with no
/// module declaration is simply a source with `name == None`).
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    /// The first declared module name, if a `module <identifier>` pattern was found.
    pub name: Option<String>,
    /// All recognized port declarations, in source order.
    pub ports: Vec<PortDecl>,
    /// All recognized signal declarations, in source order.
    pub signals: Vec<SignalDecl>,
    /// All `always` block occurrences, in source order.
    pub always_blocks: Vec<AlwaysBlock>,
    /// All `assign` statement occurrences, in source order.
    pub assigns: Vec<AssignStatement>,
    /// Errors detected during extraction.
    pub errors: Vec<Diagnostic>,
    /// Warnings detected during extraction.
    pub warnings: Vec<Diagnostic>,
}

/// Extracts the structural summary of `source`.
///
/// Runs over a comment-masked copy of the text so that `//` and `/* ... */`
/// content never matches any pattern. Declarations are recognized per keyword
/// occurrence, not per line, so several declarations on one physical line all
/// count. Declarations missing their `;`/`,` terminator still count; the
/// terminator checks belong to the diagnostic scanner, not this pass.
pub fn extract(source: &str) -> Extraction {
    let masked = mask_comments(source);
    let mut extraction = Extraction::default();

    for line in split_lines(&masked) {
        if line.is_blank() {
            continue;
        }

        if extraction.name.is_none() {
            extraction.name = module_name(&line);
        }

        for direction in [PortDirection::Input, PortDirection::Output, PortDirection::Inout] {
            for at in word_positions(line.text, direction.keyword()) {
                extraction.ports.push(PortDecl {
                    direction,
                    name: decl_ident(line.text, at + direction.keyword().len()),
                    position: line.position_at(at),
                });
            }
        }

        for kind in [
            SignalKind::Reg,
            SignalKind::Wire,
            SignalKind::Parameter,
            SignalKind::Localparam,
        ] {
            for at in word_positions(line.text, kind.keyword()) {
                extraction.signals.push(SignalDecl {
                    kind,
                    name: decl_ident(line.text, at + kind.keyword().len()),
                    position: line.position_at(at),
                });
            }
        }

        for at in word_positions(line.text, "always") {
            extraction.always_blocks.push(AlwaysBlock {
                position: line.position_at(at),
            });
        }

        for at in word_positions(line.text, "assign") {
            extraction.assigns.push(AssignStatement {
                target: decl_ident(line.text, at + "assign".len()),
                position: line.position_at(at),
            });
        }
    }

    extraction
}

/// Recognizes `module <identifier>` on one line and returns the identifier.
fn module_name(line: &Line<'_>) -> Option<String> {
    let at = veriscan_source::find_word(line.text, "module")?;
    let ident = decl_ident(line.text, at + "module".len())?;
    Some(ident)
}

/// Reads the identifier being declared after a keyword ending at `from`.
///
/// Skips whitespace, `[...]` range groups, and the width/type keywords that
/// may sit between a declaration keyword and its identifier (`input wire clk`,
/// `output reg [7:0] data`, `wire signed [3:0] s`).
fn decl_ident(text: &str, from: usize) -> Option<String> {
    let bytes = text.as_bytes();
    let mut pos = from;

    loop {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            return None;
        }
        // Skip a range group like [3:0]
        if bytes[pos] == b'[' {
            match text[pos..].find(']') {
                Some(close) => {
                    pos += close + 1;
                    continue;
                }
                None => return None,
            }
        }
        let ident = ident_at(text, pos)?;
        if matches!(ident, "wire" | "reg" | "signed" | "unsigned") {
            pos += ident.len();
            continue;
        }
        return Some(ident.to_string());
    }
}
