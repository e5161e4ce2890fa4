//! Point-in-time system metrics reported by the server.

use std::fmt;

use serde::Serialize;

use crate::errors::ValidationError;

const CPU_FIELD: &str = "cpu_usage";
const MEMORY_FIELD: &str = "memory_usage";
const DISK_FIELD: &str = "disk_usage";

/// Immutable reading of CPU, memory, and disk usage.
///
/// Every field is a finite percentage in `[0, 100]`. The only ways to build
/// one go through validation, so a snapshot in hand is always consistent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SystemSnapshot {
    cpu_usage_percent: f64,
    memory_usage_percent: f64,
    disk_usage_percent: f64,
}

impl SystemSnapshot {
    pub fn new(cpu: f64, memory: f64, disk: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            cpu_usage_percent: check_percent(CPU_FIELD, cpu)?,
            memory_usage_percent: check_percent(MEMORY_FIELD, memory)?,
            disk_usage_percent: check_percent(DISK_FIELD, disk)?,
        })
    }

    /// Parse a `/system_info` response body.
    ///
    /// Extra fields are ignored. Numbers encoded as strings are rejected.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        let json: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| ValidationError::MalformedBody(e.to_string()))?;
        let obj = json
            .as_object()
            .ok_or_else(|| ValidationError::MalformedBody("expected a JSON object".into()))?;

        let field = |name: &'static str| -> Result<f64, ValidationError> {
            let value = obj.get(name).ok_or(ValidationError::MissingField(name))?;
            value.as_f64().ok_or(ValidationError::NotANumber(name))
        };

        Self::new(field(CPU_FIELD)?, field(MEMORY_FIELD)?, field(DISK_FIELD)?)
    }

    pub fn cpu_usage_percent(&self) -> f64 {
        self.cpu_usage_percent
    }

    pub fn memory_usage_percent(&self) -> f64 {
        self.memory_usage_percent
    }

    pub fn disk_usage_percent(&self) -> f64 {
        self.disk_usage_percent
    }
}

impl fmt::Display for SystemSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cpu {:.1}% | mem {:.1}% | disk {:.1}%",
            self.cpu_usage_percent, self.memory_usage_percent, self.disk_usage_percent
        )
    }
}

fn check_percent(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange { field, value })
    }
}
