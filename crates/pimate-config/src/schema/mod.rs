//! Configuration schema types for PiMate.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod links;
mod server;
mod system;

pub use links::*;
pub use server::*;
pub use system::*;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for PiMate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PimateConfig {
    pub server: ServerConfig,
    pub polling: PollingConfig,
    pub logging: LoggingConfig,
    pub links: Vec<LinkConfig>,
}

impl Default for PimateConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            polling: PollingConfig::default(),
            logging: LoggingConfig::default(),
            links: default_links(),
        }
    }
}

impl PimateConfig {
    /// Look up a configured link by name.
    pub fn link(&self, name: &str) -> Option<&LinkConfig> {
        self.links.iter().find(|l| l.name == name)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.polling.interval_ms))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.server.connect_timeout_ms))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.server.request_timeout_ms))
    }
}
