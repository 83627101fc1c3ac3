use std::fmt;

use lumen_core::{ActionResult, Status};

/// Error delivered through a bridge's error path.
///
/// Nothing in this crate is thrown past `execute()`; every failure of an
/// asynchronous call arrives as one of these variants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ActionError {
    /// The host reported `ERROR` or `INCOMPLETE`; carries the raw outcome.
    #[error("action finished with status {}", .0.status())]
    Failed(ActionResult),

    /// A caller-supplied success handler failed.
    #[error("handler error: {0}")]
    Handler(String),

    /// The handle was never resolved, so no call was made.
    #[error("action `{action}` was never resolved and cannot be executed")]
    Unresolved {
        /// Identifier the handle was built with.
        action: String,
    },

    /// Component creation did not succeed.
    #[error("component creation finished with status {status}: {message}")]
    Component {
        /// Host status.
        status: Status,
        /// Host error message.
        message: String,
    },

    /// The settler was dropped without settling the promise.
    #[error("promise was abandoned before it settled")]
    Abandoned,
}

impl ActionError {
    /// The failed action outcome, if this error carries one.
    pub fn action_result(&self) -> Option<&ActionResult> {
        match self {
            Self::Failed(result) => Some(result),
            _ => None,
        }
    }

    /// Status of the failed outcome, if this error carries one.
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Failed(result) => Some(result.status()),
            Self::Component { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<HandlerError> for ActionError {
    fn from(err: HandlerError) -> Self {
        Self::Handler(err.0)
    }
}

/// Failure reported by a success handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerError(String);

impl HandlerError {
    /// Create a handler error from anything displayable.
    pub fn new(msg: impl fmt::Display) -> Self {
        Self(msg.to_string())
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for HandlerError {}
