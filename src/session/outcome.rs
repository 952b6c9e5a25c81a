//! Outcome types for the swallow-and-report action group.
//!
//! Two error policies coexist in the store: login/logout/register/
//! delete-account/broker-fetch failures are caught and turned into an
//! [`ActionOutcome`] (or a state-level error field), while password change
//! and profile fetch propagate their error to the caller. This module
//! covers the first group only; the second group returns plain `Result`s.

use thiserror::Error;

/// Result of a swallow-and-report action, handed back to the UI layer.
#[derive(Debug)]
pub enum ActionOutcome {
    Success { message: Option<String> },
    Failed { error: ActionError },
}

/// Why a swallow-and-report action failed.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Fixed, user-facing message (e.g. `"Logout failed"`).
    #[error("{0}")]
    Message(String),
    /// The underlying API error, passed through whole.
    #[error(transparent)]
    Api(#[from] anyhow::Error),
}

impl ActionOutcome {
    pub(crate) fn ok() -> Self {
        Self::Success { message: None }
    }

    pub(crate) fn ok_with(message: &str) -> Self {
        Self::Success {
            message: Some(message.to_string()),
        }
    }

    pub(crate) fn failed_message(message: &str) -> Self {
        Self::Failed {
            error: ActionError::Message(message.to_string()),
        }
    }

    pub(crate) fn failed_api(error: anyhow::Error) -> Self {
        Self::Failed {
            error: ActionError::Api(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Success message, when the action carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message } => message.as_deref(),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ActionError> {
        match self {
            Self::Success { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }
}
