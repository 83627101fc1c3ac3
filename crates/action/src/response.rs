//! Response shapes and the human-readable message classifier.
//!
//! Host responses arrive in several shapes. They are parsed once, at the
//! boundary, into [`Response`]; [`Classifier::classify`] then matches on it.
//! Priority, first match wins:
//!
//! 1. absent → "Undefined response"
//! 2. plain string → returned verbatim
//! 3. has a truthy `message` → that message (non-strings as JSON text)
//! 4. carries a status → first structured error message for `ERROR`
//!    (else "Unknown error"), the offline message for `INCOMPLETE`,
//!    "Unknown error" for anything else
//! 5. anything else → "Unexpected error"

use std::num::FpCategory;

use lumen_core::{ActionResult, Messages, Status};
use serde_json::Value;

use crate::error::ActionError;

/// A host response, parsed into the shapes the classifier understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// No response at all.
    Empty,
    /// The response is a plain string.
    Literal(String),
    /// The response carries a `message`.
    Messaged(String),
    /// The response carries a status and, optionally, the first structured
    /// error message.
    StatusBearing {
        /// Reported status.
        status: Status,
        /// Message of the first structured error, if non-empty.
        first_error: Option<String>,
    },
    /// Any other shape.
    Unrecognized,
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_owned())
}

/// A `message` field rendered as text, unless it is empty, `false`, zero
/// or null.
fn message_field(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => non_empty(s),
        Value::Number(n) if n.as_f64().is_some_and(|f| f.classify() == FpCategory::Zero) => None,
        other => Some(other.to_string()),
    }
}

impl Response {
    /// Parse an arbitrary JSON response.
    ///
    /// Objects are checked for a non-empty `message` first (non-string values
    /// are rendered as JSON text), then for a
    /// `state` field naming a [`Status`]; the structured errors of a
    /// status-bearing object are read from `response.errors` or `errors`.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::String(s) => Self::Literal(s.clone()),
            Value::Object(map) => {
                if let Some(message) = map.get("message").and_then(message_field) {
                    return Self::Messaged(message);
                }
                let status = map
                    .get("state")
                    .and_then(Value::as_str)
                    .and_then(|s| s.parse::<Status>().ok());
                match status {
                    Some(status) => {
                        let errors = map
                            .get("response")
                            .and_then(|r| r.get("errors"))
                            .or_else(|| map.get("errors"));
                        let first_error = errors
                            .and_then(|e| e.get(0))
                            .and_then(|e| e.get("message"))
                            .and_then(Value::as_str)
                            .and_then(non_empty);
                        Self::StatusBearing {
                            status,
                            first_error,
                        }
                    }
                    None => Self::Unrecognized,
                }
            }
            _ => Self::Unrecognized,
        }
    }
}

impl From<&ActionResult> for Response {
    fn from(result: &ActionResult) -> Self {
        Self::StatusBearing {
            status: result.status(),
            first_error: result
                .raw_response()
                .and_then(|r| r.first_message())
                .and_then(non_empty),
        }
    }
}

impl From<ActionResult> for Response {
    fn from(result: ActionResult) -> Self {
        Self::from(&result)
    }
}

impl From<&ActionError> for Response {
    fn from(err: &ActionError) -> Self {
        match err {
            ActionError::Failed(result) => Self::from(result),
            ActionError::Handler(message) | ActionError::Component { message, .. } => {
                non_empty(message).map_or(Self::Unrecognized, Self::Messaged)
            }
            ActionError::Abandoned => Self::Empty,
            other => Self::Messaged(other.to_string()),
        }
    }
}

impl From<&Value> for Response {
    fn from(value: &Value) -> Self {
        Self::from_value(value)
    }
}

impl From<&str> for Response {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_owned())
    }
}

impl From<String> for Response {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl<T: Into<Response>> From<Option<T>> for Response {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Empty, Into::into)
    }
}

/// Maps responses to human-readable messages.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    messages: Messages,
}

impl Classifier {
    /// Classifier with custom fallback messages.
    pub fn with_messages(messages: Messages) -> Self {
        Self { messages }
    }

    /// Fallback messages in use.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Human-readable message for `response`. Total; never fails.
    pub fn classify(&self, response: &Response) -> String {
        match response {
            Response::Empty => self.messages.undefined_response.clone(),
            Response::Literal(s) | Response::Messaged(s) => s.clone(),
            Response::StatusBearing {
                status: Status::Error,
                first_error,
            } => first_error
                .clone()
                .unwrap_or_else(|| self.messages.unknown_error.clone()),
            Response::StatusBearing {
                status: Status::Incomplete,
                ..
            } => self.messages.incomplete_action.clone(),
            Response::StatusBearing {
                status: Status::Success,
                ..
            } => self.messages.unknown_error.clone(),
            Response::Unrecognized => self.messages.unexpected_error.clone(),
        }
    }
}

/// Classify with the default messages.
///
/// ```rust
/// use lumen_action::classify;
/// use lumen_core::ActionResult;
///
/// assert_eq!(classify(&ActionResult::error_message("field required")), "field required");
/// assert_eq!(classify(None::<&str>), "Undefined response");
/// ```
pub fn classify(response: impl Into<Response>) -> String {
    Classifier::default().classify(&response.into())
}
