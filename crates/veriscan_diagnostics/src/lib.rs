//! Diagnostic creation, severity management, and rendering.
//!
//! This crate provides structured [`Diagnostic`] messages with a severity
//! level, a stable [`DiagnosticCode`], and a 1-based source position. The
//! thread-safe [`DiagnosticSink`] accumulates diagnostics during analysis,
//! and [`DiagnosticRenderer`] implementations format them for terminal or
//! machine-readable output.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::DiagnosticCode;
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
