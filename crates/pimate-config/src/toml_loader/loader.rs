//! Core TOML config loading: read from path or platform default.

use crate::schema::PimateConfig;
use pimate_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::default_config_path;

/// Parse config text. Missing fields take their defaults.
pub fn parse_toml(content: &str) -> Result<PimateConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// Validation is left to the caller.
pub fn load_from_path(path: &Path) -> Result<PimateConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config = parse_toml(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/pimate/config.toml`
/// On Linux: `~/.config/pimate/config.toml`
///
/// If the file does not exist, returns defaults. Nothing is written.
pub fn load_default() -> Result<PimateConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, using defaults", path.display());
            Ok(PimateConfig::default())
        }
        Err(e) => Err(e),
    }
}
