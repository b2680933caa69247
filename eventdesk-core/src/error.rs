//! Error types for eventdesk.

use thiserror::Error;

use crate::desk::Action;
use crate::form::Field;

/// Errors raised by configuration loading and the remote client.
#[derive(Error, Debug)]
pub enum EventDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport, HTTP status and decode failures all land here with the raw message.
    #[error("{0}")]
    Remote(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for EventDeskError {
    fn from(err: reqwest::Error) -> Self {
        EventDeskError::Remote(err.to_string())
    }
}

/// Result type alias for eventdesk operations.
pub type EventDeskResult<T> = Result<T, EventDeskError>;

/// Local validation failures. These block a request before it reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    #[error("Please fill all fields properly!")]
    IncompleteForm,

    #[error("Please fill all fields before updating!")]
    IncompleteUpdate,

    #[error("Select an event to {action}!")]
    NoSelection { action: Action },

    #[error("{field} must be a whole number")]
    NotANumber { field: Field },

    #[error("Another request is still in progress")]
    Busy,
}
