use tokio::sync::broadcast;

use crate::errors::PollError;
use crate::snapshot::SystemSnapshot;

/// Everything the core reports to a front-end.
#[derive(Debug, Clone)]
pub enum Event {
    SnapshotUpdated(SystemSnapshot),
    PollFailed(PollError),
    Shutdown,
}

/// Fan-out of core events to any number of subscribers.
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// A cheap publisher handle for moving into callbacks.
    pub fn sender(&self) -> broadcast::Sender<Event> {
        self.sender.clone()
    }
}
