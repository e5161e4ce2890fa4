use serde::{Deserialize, Serialize};

/// A named external link, opened in the host's browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub name: String,
    #[serde(default)]
    pub label: String,
    pub url: String,
}

impl LinkConfig {
    pub fn new(name: &str, label: &str, url: &str) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            url: url.into(),
        }
    }

    /// Label for listings, falling back to the name.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}

pub(crate) fn default_links() -> Vec<LinkConfig> {
    vec![
        LinkConfig::new("dropbox", "Dropbox", "https://www.dropbox.com"),
        LinkConfig::new("github", "GitHub", "https://github.com"),
    ]
}
