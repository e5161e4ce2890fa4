//! One-shot remote commands.
//!
//! Every dispatch issues exactly one request and never retries. Faults are
//! turned into a `CommandOutcome`; nothing escapes as an error or panic.


use std::sync::Arc;

use pimate_common::{
    new_correlation_id, ActionId, CommandOutcome, CommandRequest, Reporting, TransportError,
    VolumeDirection,
};
use tracing::{debug, info, warn, Instrument};

use crate::endpoint::BaseUrl;
use crate::transport::{HttpResponse, Transport};

/// Sends user-triggered actions to the server. Holds no mutable state, so
/// concurrent dispatches are independent and may complete in any order.
pub struct CommandDispatcher {
    transport: Arc<dyn Transport>,
    base: BaseUrl,
}

impl CommandDispatcher {
    pub fn new(transport: Arc<dyn Transport>, base: BaseUrl) -> Self {
        Self { transport, base }
    }

    /// Dispatch any action.
    ///
    /// Standard actions always yield an outcome. Fire-and-forget actions
    /// (`spotify_play`, `home_auto`) yield `None` once the server answered,
    /// whatever the status, and a failure outcome only when the request
    /// never got a response.
    pub async fn dispatch(&self, request: CommandRequest) -> Option<CommandOutcome> {
        let action = request.action;
        match action.reporting() {
            Reporting::Standard => Some(self.run_standard(action).await),
            Reporting::FireAndForget => self.run_fire_and_forget(action).await,
        }
    }

    pub async fn make_note(&self) -> CommandOutcome {
        self.run_standard(ActionId::MakeNote).await
    }

    pub async fn send_sms(&self) -> CommandOutcome {
        self.run_standard(ActionId::SendSms).await
    }

    pub async fn show_news(&self) -> CommandOutcome {
        self.run_standard(ActionId::ShowNews).await
    }

    pub async fn give_alpha(&self) -> CommandOutcome {
        self.run_standard(ActionId::GiveAlpha).await
    }

    pub async fn give_translation(&self) -> CommandOutcome {
        self.run_standard(ActionId::GiveTranslation).await
    }

    pub async fn fetch_camera(&self) -> CommandOutcome {
        self.run_standard(ActionId::FetchCamera).await
    }

    pub async fn spotify_play(&self) -> Option<CommandOutcome> {
        self.run_fire_and_forget(ActionId::SpotifyPlay).await
    }

    pub async fn home_auto(&self) -> Option<CommandOutcome> {
        self.run_fire_and_forget(ActionId::HomeAuto).await
    }

    /// Adjust volume by a raw direction string.
    ///
    /// Only `"up"` and `"down"` are accepted. Anything else is a silent
    /// no-op: no request, no outcome.
    pub async fn adjust_volume(&self, direction: &str) -> Option<CommandOutcome> {
        match VolumeDirection::parse(direction) {
            Some(direction) => Some(self.adjust_volume_to(direction).await),
            None => {
                debug!(direction, "ignoring unknown volume direction");
                None
            }
        }
    }

    pub async fn adjust_volume_to(&self, direction: VolumeDirection) -> CommandOutcome {
        self.run_standard(ActionId::volume(direction)).await
    }

    async fn run_standard(&self, action: ActionId) -> CommandOutcome {
        let span = tracing::info_span!("dispatch", action = %action, cid = %new_correlation_id());
        async {
            match self.send(action).await {
                Ok(response) if response.is_ok() => {
                    info!("command succeeded");
                    CommandOutcome::success(action)
                }
                Ok(response) => {
                    warn!(status = response.status, "command rejected by server");
                    CommandOutcome::rejected(action)
                }
                Err(e) => {
                    warn!(error = %e, "command failed");
                    CommandOutcome::transport_failure(action, &e)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn run_fire_and_forget(&self, action: ActionId) -> Option<CommandOutcome> {
        let span = tracing::info_span!("dispatch", action = %action, cid = %new_correlation_id());
        async {
            match self.send(action).await {
                Ok(response) => {
                    debug!(status = response.status, "command delivered");
                    None
                }
                Err(e) => {
                    warn!(error = %e, "command failed");
                    Some(CommandOutcome::transport_failure(action, &e))
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn send(&self, action: ActionId) -> Result<HttpResponse, TransportError> {
        let url = self.base.endpoint(action.endpoint());
        debug!(method = ?action.method(), url = %url, "sending command");
        self.transport.send(action.method(), url).await
    }
}
