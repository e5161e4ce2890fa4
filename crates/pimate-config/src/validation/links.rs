use std::collections::HashSet;

use crate::schema::PimateConfig;

use super::helpers::validate_http_url;

/// Link names must be non-empty and unique; URLs must be http(s).
pub(crate) fn validate_links(errors: &mut Vec<String>, config: &PimateConfig) {
    let mut seen = HashSet::new();
    for (i, link) in config.links.iter().enumerate() {
        let name = link.name.trim();
        if name.is_empty() {
            errors.push(format!("links[{i}].name must not be empty"));
        } else if !seen.insert(name) {
            errors.push(format!("links[{i}].name '{name}' is duplicated"));
        }
        validate_http_url(errors, &format!("links[{i}].url"), &link.url);
    }
}
