//! Structural extraction over Verilog source text.
//!
//! This crate recovers a module's structural summary without parsing a full
//! grammar: the declared module name, port and signal declarations,
//! always-block and assign-statement occurrences. It is a shallow,
//! line-pattern-based recognizer operating on comment-masked text, so
//! commented-out declarations never count.
//!
//! Extraction never fails: source with no recognizable structure yields
//! empty collections and an absent module name.

#![warn(missing_docs)]

pub mod decl;
pub mod extract;

pub use decl::{AlwaysBlock, AssignStatement, PortDecl, PortDirection, SignalDecl, SignalKind};
pub use extract::{extract, Extraction};
