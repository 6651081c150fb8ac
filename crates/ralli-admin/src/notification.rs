//! Transient user-facing messages produced by admin actions

use ralli_core::Error;
use serde::Serialize;

/// Notification severity tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The action was applied
    Success,
    /// The action was rejected
    Error,
}

/// A message for the toast surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Text shown to the user
    pub message: String,
    /// Severity tag
    pub severity: Severity,
}

impl Notification {
    /// Success message
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// Error message
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

impl From<&Error> for Notification {
    fn from(error: &Error) -> Self {
        Self::error(error.to_string())
    }
}

/// Result of an admin action: the message to show and, on success, the
/// affected record
#[derive(Debug, Clone, Serialize)]
pub struct Outcome<T> {
    /// Message to show
    pub notification: Notification,
    /// Created or updated record, `None` when the action was rejected
    pub record: Option<T>,
}

impl<T> Outcome<T> {
    /// Successful action
    #[must_use]
    pub fn applied(record: T, message: impl Into<String>) -> Self {
        Self {
            notification: Notification::success(message),
            record: Some(record),
        }
    }

    /// Rejected action
    #[must_use]
    pub fn rejected(error: &Error) -> Self {
        Self {
            notification: error.into(),
            record: None,
        }
    }

    /// Whether the action was applied
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        self.record.is_some()
    }
}
