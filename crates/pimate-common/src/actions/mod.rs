use serde::{Deserialize, Serialize};

mod action_enum;
mod routing;

pub use action_enum::*;
pub use routing::UnknownAction;

/// HTTP verb used for an action request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Whether the server's response status is turned into an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reporting {
    /// Status 200 is success, anything else is failure.
    Standard,
    /// Any response is accepted silently; only transport failures surface.
    FireAndForget,
}

/// Direction for volume adjustment. Closed set; anything else is rejected
/// before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeDirection {
    Up,
    Down,
}

impl VolumeDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "up" => Some(VolumeDirection::Up),
            "down" => Some(VolumeDirection::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeDirection::Up => "up",
            VolumeDirection::Down => "down",
        }
    }
}
