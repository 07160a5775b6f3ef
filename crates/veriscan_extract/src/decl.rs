//! Declaration records recovered by structural extraction.
//!
//! Every record carries the [`SourcePosition`] of the keyword that produced
//! it, so UI consumers can jump to the declaration site.

use serde::{Deserialize, Serialize};
use veriscan_source::SourcePosition;

/// The direction of a port declaration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// An `input` port.
    Input,
    /// An `output` port.
    Output,
    /// A bidirectional `inout` port.
    Inout,
}

impl PortDirection {
    /// The Verilog keyword for this direction.
    pub fn keyword(self) -> &'static str {
        match self {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
            PortDirection::Inout => "inout",
        }
    }
}

/// A port declaration recognized from an `input`/`output`/`inout` keyword.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PortDecl {
    /// The port direction.
    pub direction: PortDirection,
    /// The declared identifier, when one could be recognized.
    pub name: Option<String>,
    /// The position of the direction keyword.
    pub position: SourcePosition,
}

/// The kind of a signal declaration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// A `reg` variable.
    Reg,
    /// A `wire` net.
    Wire,
    /// A `parameter` constant.
    Parameter,
    /// A `localparam` constant.
    Localparam,
}

impl SignalKind {
    /// The Verilog keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            SignalKind::Reg => "reg",
            SignalKind::Wire => "wire",
            SignalKind::Parameter => "parameter",
            SignalKind::Localparam => "localparam",
        }
    }
}

/// A signal declaration recognized from a `reg`/`wire`/`parameter`/`localparam` keyword.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SignalDecl {
    /// The signal kind.
    pub kind: SignalKind,
    /// The declared identifier, when one could be recognized.
    pub name: Option<String>,
    /// The position of the kind keyword.
    pub position: SourcePosition,
}

/// An `always` block occurrence.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AlwaysBlock {
    /// The position of the `always` keyword.
    pub position: SourcePosition,
}

/// An `assign` statement occurrence.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AssignStatement {
    /// The assignment target identifier, when one could be recognized.
    pub target: Option<String>,
    /// The position of the `assign` keyword.
    pub position: SourcePosition,
}
