//! `pimate`: command-line front-end for the PiMate home server.

mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use pimate_common::ConfigError;
use pimate_config::PimateConfig;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    let config = match load_settings(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pimate: {e}");
            return ExitCode::from(2);
        }
    };

    logging::init(args.log_level.as_deref(), config.logging.level);
    debug!(server = %config.server.base_url, "configuration loaded");

    match commands::execute(args.command, &config).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("pimate: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load the config file and apply command-line overrides.
fn load_settings(args: &cli::Args) -> Result<PimateConfig, ConfigError> {
    let mut config = pimate_config::load_config(args.config.as_deref())?;
    if let Some(server) = &args.server {
        config.server.base_url = server.clone();
        pimate_config::validation::validate(&config)?;
    }
    Ok(config)
}
