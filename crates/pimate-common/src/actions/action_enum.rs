use serde::{Deserialize, Serialize};

/// Every remote action the server exposes.
///
/// The CLI and any front-end resolve user intent to an `ActionId`; the
/// command dispatcher maps it to an HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    // -- Assistant / productivity --
    MakeNote,
    SendSms,
    ShowNews,
    GiveAlpha,
    GiveTranslation,
    FetchCamera,

    // -- Home --
    HomeAuto,
    SpotifyPlay,

    // -- Volume --
    AdjustVolumeUp,
    AdjustVolumeDown,
}

/// A single dispatchable action, consumed by exactly one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRequest {
    pub action: ActionId,
}

impl CommandRequest {
    pub fn new(action: ActionId) -> Self {
        Self { action }
    }
}

impl From<ActionId> for CommandRequest {
    fn from(action: ActionId) -> Self {
        Self::new(action)
    }
}
