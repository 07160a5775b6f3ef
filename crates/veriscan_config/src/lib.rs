//! Parsing and validation of `veriscan.toml` project configuration files.
//!
//! This crate reads the project configuration file and produces a
//! strongly-typed [`ProjectConfig`] carrying lint rule overrides and server
//! settings. All sections are optional; an absent file yields defaults.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{LintConfig, ProjectConfig, ProjectMeta, ServerConfig};
