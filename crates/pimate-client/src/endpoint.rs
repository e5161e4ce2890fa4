//! Server base URL and endpoint resolution.

use std::fmt;

use pimate_common::web::{parse_http_url, Url};
use pimate_common::ConfigError;

/// Path of the metrics endpoint.
pub const SYSTEM_INFO_ENDPOINT: &str = "system_info";

/// Process-wide base URL of the control API. Set once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut url = parse_http_url(raw).map_err(ConfigError::ValidationError)?;
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self(url))
    }

    /// Resolve `path` (no leading slash) below the base path.
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path.split('/'));
        }
        url
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
