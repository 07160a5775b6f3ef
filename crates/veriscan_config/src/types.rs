//! Configuration types deserialized from `veriscan.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `veriscan.toml`.
///
/// Every section is optional so that running against a bare directory (or no
/// file at all) works with sensible defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata.
    #[serde(default)]
    pub project: ProjectMeta,
    /// Lint settings (deny/allow/warn rule lists).
    #[serde(default)]
    pub lint: LintConfig,
    /// HTTP analysis service settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Project metadata.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    #[serde(default = "default_project_name")]
    pub name: String,
    /// The project version string.
    #[serde(default = "default_project_version")]
    pub version: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
}

impl Default for ProjectMeta {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            version: default_project_version(),
            description: String::new(),
        }
    }
}

fn default_project_name() -> String {
    "unnamed".to_string()
}

fn default_project_version() -> String {
    "0.0.0".to_string()
}

/// Lint rule configuration.
///
/// Rules are addressed by their kebab-case names (e.g. `missing-semicolon`).
/// Rules in `allow` are suppressed entirely; rules in `deny` have their
/// diagnostics promoted to error severity; rules in `warn` keep their default
/// severity (listed for documentation/override symmetry).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LintConfig {
    /// Rule names promoted to error severity.
    #[serde(default)]
    pub deny: Vec<String>,
    /// Rule names suppressed entirely.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Rule names pinned at their default severity.
    #[serde(default)]
    pub warn: Vec<String>,
}

/// HTTP analysis service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The socket address the service binds to.
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Whether internal failure details are exposed in responses.
    #[serde(default)]
    pub dev: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            dev: false,
        }
    }
}

fn default_addr() -> String {
    "127.0.0.1:8080".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config: ProjectConfig = toml::from_str("").unwrap();
        assert_eq!(config.project.name, "unnamed");
        assert!(config.lint.deny.is_empty());
        assert!(config.lint.allow.is_empty());
        assert_eq!(config.server.addr, "127.0.0.1:8080");
        assert!(!config.server.dev);
    }

    #[test]
    fn full_config_parses() {
        let config: ProjectConfig = toml::from_str(
            r#"
[project]
name = "uart"
version = "0.2.0"
description = "UART RX/TX"

[lint]
deny = ["potential-latch"]
allow = ["combinational-loop"]

[server]
addr = "0.0.0.0:9000"
dev = true
"#,
        )
        .unwrap();
        assert_eq!(config.project.name, "uart");
        assert_eq!(config.lint.deny, vec!["potential-latch"]);
        assert_eq!(config.lint.allow, vec!["combinational-loop"]);
        assert_eq!(config.server.addr, "0.0.0.0:9000");
        assert!(config.server.dev);
    }

    #[test]
    fn partial_sections_use_defaults() {
        let config: ProjectConfig = toml::from_str("[project]\nname = \"fifo\"\n").unwrap();
        assert_eq!(config.project.name, "fifo");
        assert_eq!(config.project.version, "0.0.0");
        assert_eq!(config.server.addr, "127.0.0.1:8080");
    }
}
