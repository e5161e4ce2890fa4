pub mod actions;
pub mod errors;
pub mod events;
pub mod id;
pub mod notifications;
pub mod outcome;
pub mod snapshot;
pub mod web;

pub use actions::{ActionId, CommandRequest, HttpMethod, Reporting, VolumeDirection};
pub use errors::{
    ConfigError, PimateError, PlatformError, PollError, PollerError, TransportError,
    ValidationError,
};
pub use events::{Event, EventBus};
pub use id::new_correlation_id;
pub use notifications::{Notification, NotificationLevel};
pub use outcome::CommandOutcome;
pub use snapshot::SystemSnapshot;
