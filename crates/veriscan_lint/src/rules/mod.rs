//! All built-in scan rule implementations.
//!
//! This module re-exports all individual rule types and provides
//! `register_builtin_rules` to add all 7 rules to a `ScanEngine`.

mod combinational_loop;
mod implicit_sensitivity;
mod invalid_port_declaration;
mod missing_end;
mod missing_endcase;
mod missing_semicolon;
mod potential_latch;

pub use combinational_loop::CombinationalLoop;
pub use implicit_sensitivity::ImplicitSensitivity;
pub use invalid_port_declaration::InvalidPortDeclaration;
pub use missing_end::MissingEnd;
pub use missing_endcase::MissingEndcase;
pub use missing_semicolon::MissingSemicolon;
pub use potential_latch::PotentialLatch;

use crate::ScanEngine;

/// Registers all 7 built-in scan rules with the engine.
pub fn register_builtin_rules(engine: &mut ScanEngine) {
    engine.register(Box::new(CombinationalLoop));
    engine.register(Box::new(InvalidPortDeclaration));
    engine.register(Box::new(MissingSemicolon));
    engine.register(Box::new(ImplicitSensitivity));
    engine.register(Box::new(PotentialLatch));
    engine.register(Box::new(MissingEndcase));
    engine.register(Box::new(MissingEnd));
}
