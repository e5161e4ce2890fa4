use crate::errors::PollError;
use crate::outcome::CommandOutcome;

/// Severity level for user-facing notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A user-facing notice. One is produced per occurrence; repeats are never
/// merged or suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Info, title, body)
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Error, title, body)
    }

    fn with_level(
        level: NotificationLevel,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Notice for a failed metrics tick.
    pub fn from_poll_error(error: &PollError) -> Self {
        match error {
            PollError::Status(_) => {
                Self::error("Error", format!("Failed to fetch system information ({error})."))
            }
            PollError::Transport(_) | PollError::Validation(_) => {
                Self::error("Error", format!("An error occurred: {error}"))
            }
        }
    }

    /// Notice for a reported command outcome.
    pub fn from_outcome(outcome: &CommandOutcome) -> Self {
        if outcome.succeeded {
            Self::info("Success", outcome.message.clone())
        } else {
            Self::error("Error", outcome.message.clone())
        }
    }
}
