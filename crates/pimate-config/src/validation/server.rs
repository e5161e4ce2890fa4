//! Validation for the server and polling sections.

use crate::schema::PimateConfig;

use super::helpers::{validate_http_url, validate_range};

pub(crate) fn validate_server(errors: &mut Vec<String>, config: &PimateConfig) {
    validate_http_url(errors, "server.base_url", &config.server.base_url);
    validate_range(
        errors,
        "server.connect_timeout_ms",
        config.server.connect_timeout_ms,
        100,
        60_000,
    );
    validate_range(
        errors,
        "server.request_timeout_ms",
        config.server.request_timeout_ms,
        100,
        300_000,
    );
}

pub(crate) fn validate_polling(errors: &mut Vec<String>, config: &PimateConfig) {
    validate_range(
        errors,
        "polling.interval_ms",
        config.polling.interval_ms,
        100,
        3_600_000,
    );
}
