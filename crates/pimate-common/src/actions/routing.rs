use std::fmt;
use std::str::FromStr;

use super::{ActionId, HttpMethod, Reporting, VolumeDirection};

impl ActionId {
    /// All actions, in dashboard order.
    pub const ALL: [ActionId; 10] = [
        ActionId::MakeNote,
        ActionId::SendSms,
        ActionId::ShowNews,
        ActionId::GiveAlpha,
        ActionId::GiveTranslation,
        ActionId::FetchCamera,
        ActionId::SpotifyPlay,
        ActionId::HomeAuto,
        ActionId::AdjustVolumeUp,
        ActionId::AdjustVolumeDown,
    ];

    /// Wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionId::MakeNote => "make_note",
            ActionId::SendSms => "send_sms",
            ActionId::ShowNews => "show_news",
            ActionId::GiveAlpha => "give_alpha",
            ActionId::GiveTranslation => "give_translation",
            ActionId::FetchCamera => "fetch_camera",
            ActionId::HomeAuto => "home_auto",
            ActionId::SpotifyPlay => "spotify_play",
            ActionId::AdjustVolumeUp => "adjust_volume_up",
            ActionId::AdjustVolumeDown => "adjust_volume_down",
        }
    }

    /// Human-readable label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            ActionId::MakeNote => "Take Note",
            ActionId::SendSms => "Send SMS",
            ActionId::ShowNews => "Read News",
            ActionId::GiveAlpha => "Ask Assistant",
            ActionId::GiveTranslation => "Translate",
            ActionId::FetchCamera => "View Camera",
            ActionId::HomeAuto => "Home Automation",
            ActionId::SpotifyPlay => "Spotify",
            ActionId::AdjustVolumeUp => "Volume Up",
            ActionId::AdjustVolumeDown => "Volume Down",
        }
    }

    /// Path relative to the server base URL, without a leading slash.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ActionId::AdjustVolumeUp => "adjust_volume/up",
            ActionId::AdjustVolumeDown => "adjust_volume/down",
            other => other.as_str(),
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            ActionId::SpotifyPlay => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }

    pub fn reporting(&self) -> Reporting {
        match self {
            ActionId::SpotifyPlay | ActionId::HomeAuto => Reporting::FireAndForget,
            _ => Reporting::Standard,
        }
    }

    /// Wire name with underscores turned into spaces, used in outcome messages.
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }

    pub fn volume(direction: VolumeDirection) -> Self {
        match direction {
            VolumeDirection::Up => ActionId::AdjustVolumeUp,
            VolumeDirection::Down => ActionId::AdjustVolumeDown,
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for ActionId {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionId::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
