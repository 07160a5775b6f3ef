//! Loading `veriscan.toml` from disk or from a string.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// The configuration file name searched for in a project directory.
pub const CONFIG_FILE_NAME: &str = "veriscan.toml";

/// Loads the configuration from `<dir>/veriscan.toml`.
///
/// A missing file is not an error: defaults are returned so the tool works
/// in any directory. A present-but-malformed file is a hard error.
pub fn load_config(dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(ProjectConfig::default());
    }
    let content = std::fs::read_to_string(&path)?;
    load_config_from_str(&content)
}

/// Parses a configuration from TOML text.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Validates cross-field constraints that serde defaults can't express.
fn validate(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.server.addr.trim().is_empty() {
        return Err(ConfigError::Validation("server.addr is empty".to_string()));
    }
    if let Some(rule) = config
        .lint
        .deny
        .iter()
        .find(|r| config.lint.allow.contains(r))
    {
        return Err(ConfigError::Validation(format!(
            "rule '{rule}' is both denied and allowed"
        )));
    }
    Ok(())
}
