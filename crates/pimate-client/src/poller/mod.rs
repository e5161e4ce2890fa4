//! Periodic metrics polling.
//!
//! `MetricsPoller::start` spawns one tokio task that issues a
//! `GET /system_info` per tick and publishes each validated snapshot. The
//! task awaits every request before waiting for the next tick and the timer
//! skips missed ticks, so at most one request is in flight per poller.
//! Failures are reported through `on_error` and polling carries on; only
//! `PollerHandle::stop` (or dropping the handle) ends it.

mod gate;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use pimate_common::web::Url;
use pimate_common::{HttpMethod, PollError, PollerError, SystemSnapshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::endpoint::{BaseUrl, SYSTEM_INFO_ENDPOINT};
use crate::transport::Transport;

use self::gate::DeliveryGate;

/// Builds pollers against one server.
pub struct MetricsPoller {
    transport: Arc<dyn Transport>,
    url: Url,
}

impl MetricsPoller {
    pub fn new(transport: Arc<dyn Transport>, base: &BaseUrl) -> Self {
        Self {
            transport,
            url: base.endpoint(SYSTEM_INFO_ENDPOINT),
        }
    }

    /// Start polling every `interval`. The first tick fires immediately.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<U, E>(
        &self,
        interval: Duration,
        on_update: U,
        on_error: E,
    ) -> Result<PollerHandle, PollerError>
    where
        U: FnMut(SystemSnapshot) + Send + 'static,
        E: FnMut(PollError) + Send + 'static,
    {
        if interval.is_zero() {
            return Err(PollerError::InvalidInterval);
        }

        let gate = Arc::new(DeliveryGate::new(Box::new(on_update), Box::new(on_error)));
        let task = tokio::spawn(poll_loop(
            Arc::clone(&gate),
            Arc::clone(&self.transport),
            self.url.clone(),
            interval,
        ));

        info!(url = %self.url, interval_ms = interval.as_millis() as u64, "metrics poller started");
        Ok(PollerHandle { gate, task })
    }

    /// Run a single poll without a timer.
    pub async fn poll_once(&self) -> Result<SystemSnapshot, PollError> {
        fetch_snapshot(self.transport.as_ref(), &self.url).await
    }
}

/// Owner of a running poller. Dropping it stops the poller.
pub struct PollerHandle {
    gate: Arc<DeliveryGate>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop polling. After this returns no callback runs, even if a request
    /// is still in flight; its response is discarded. Idempotent, and safe
    /// to call from inside a callback.
    ///
    /// When called from another thread while a callback is running, this
    /// waits for that callback to return. Two pollers whose callbacks stop
    /// each other from different threads can therefore deadlock; stop a
    /// different poller from outside its callbacks.
    pub fn stop(&self) {
        self.task.abort();
        if self.gate.close() {
            info!("metrics poller stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.gate.is_open()
    }

    /// Last known-good snapshot. Failed ticks never clear it.
    pub fn latest(&self) -> Option<SystemSnapshot> {
        self.gate.latest()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn poll_loop(
    gate: Arc<DeliveryGate>,
    transport: Arc<dyn Transport>,
    url: Url,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        if !gate.is_open() {
            break;
        }

        let result = fetch_snapshot(transport.as_ref(), &url).await;
        match &result {
            Ok(snapshot) => debug!(%snapshot, "metrics updated"),
            Err(e) => warn!(error = %e, "metrics poll failed"),
        }
        gate.deliver(result);
    }
}

async fn fetch_snapshot(transport: &dyn Transport, url: &Url) -> Result<SystemSnapshot, PollError> {
    let response = transport.send(HttpMethod::Get, url.clone()).await?;
    if !response.is_ok() {
        return Err(PollError::Status(response.status));
    }
    Ok(SystemSnapshot::from_json(&response.body)?)
}
