//! Remote server and polling configuration types.

use serde::{Deserialize, Serialize};

/// Where the home server lives and how long to wait for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL of the control API, e.g. `http://192.168.29.17:5000`.
    pub base_url: String,
    /// TCP connect timeout in milliseconds (valid range: 100-60000).
    pub connect_timeout_ms: u32,
    /// Whole-request timeout in milliseconds (valid range: 100-300000).
    pub request_timeout_ms: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://192.168.29.17:5000".into(),
            connect_timeout_ms: 3000,
            request_timeout_ms: 10_000,
        }
    }
}

/// Metrics polling cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Milliseconds between ticks (valid range: 100-3600000).
    pub interval_ms: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self { interval_ms: 5000 }
    }
}
