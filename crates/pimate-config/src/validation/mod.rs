//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod links;
mod server;


use crate::schema::PimateConfig;
use pimate_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PimateConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    server::validate_server(&mut errors, config);
    server::validate_polling(&mut errors, config);
    links::validate_links(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
