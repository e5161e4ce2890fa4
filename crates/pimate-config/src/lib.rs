//! PiMate configuration system.
//!
//! TOML-based configuration for the server address, polling cadence,
//! named links, and logging. All sections use defaults so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pimate_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{LinkConfig, PimateConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use pimate_common::ConfigError;

/// Load config from `path`, or from the platform default location when
/// `path` is `None`, and validate it.
///
/// A missing default file yields the built-in defaults. An explicit path
/// that does not exist is an error.
pub fn load_config(path: Option<&Path>) -> Result<PimateConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PimateConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
