use serde::Serialize;

use crate::actions::ActionId;
use crate::errors::TransportError;

/// Result of one dispatched command, surfaced once to the caller.
///
/// `message` is cosmetic; `succeeded` alone decides success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub succeeded: bool,
    pub action: ActionId,
    pub message: String,
}

impl CommandOutcome {
    pub fn success(action: ActionId) -> Self {
        Self {
            succeeded: true,
            action,
            message: format!("{} action successful.", action.display_name()),
        }
    }

    /// The server answered with a status other than 200.
    pub fn rejected(action: ActionId) -> Self {
        Self {
            succeeded: false,
            action,
            message: format!(
                "Failed to perform {}. Please try again.",
                action.display_name()
            ),
        }
    }

    pub fn transport_failure(action: ActionId, error: &TransportError) -> Self {
        Self {
            succeeded: false,
            action,
            message: format!("An error occurred: {error}"),
        }
    }
}
