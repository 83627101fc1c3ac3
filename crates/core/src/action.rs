//! Action descriptors and the outcome of one host action call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::keys::ActionName;

/// Parameter mapping bound onto an action before it is enqueued.
pub type Params = Map<String, Value>;

/// A resolved, parameter-bound handle to one remote call.
///
/// The descriptor is mutated only before it is handed to the host; the
/// host receives an owned copy per enqueue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    /// Namespaced action identifier.
    pub target: ActionName,
    /// Parameters bound onto the call.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub params: Params,
}

impl ActionDescriptor {
    /// Create a descriptor with no parameters.
    pub fn new(target: ActionName) -> Self {
        Self {
            target,
            params: Params::new(),
        }
    }

    /// Replace the parameter mapping.
    pub fn set_params(&mut self, params: Params) {
        self.params = params;
    }

    /// Bind a single parameter, overwriting any previous value.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(name.into(), value.into());
    }
}

/// Outcome state reported by the host for one action call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The call returned a value.
    Success,
    /// The server reported an error.
    Error,
    /// No response from the server, or the client is offline.
    Incomplete,
}

impl Status {
    /// Wire representation (`"SUCCESS"`, `"ERROR"`, `"INCOMPLETE"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
            Self::Incomplete => "INCOMPLETE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUCCESS" => Ok(Self::Success),
            "ERROR" => Ok(Self::Error),
            "INCOMPLETE" => Ok(Self::Incomplete),
            other => Err(format!("unknown action status `{other}`")),
        }
    }
}

/// One structured error entry reported by the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable message, when the server supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Any other fields (page errors, field errors, codes).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ErrorDetail {
    /// Error entry carrying only a message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            extra: Map::new(),
        }
    }
}

/// Opaque response detail attached to non-successful outcomes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawResponse {
    /// Structured errors in server order.
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

impl RawResponse {
    /// Message of the first error entry, if it has one.
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().and_then(|e| e.message.as_deref())
    }
}

/// Outcome of one remote call.
///
/// Exactly one of the return value and the raw response is present: the
/// enum shape makes any other combination unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionResult {
    /// The call returned `value`.
    Success {
        /// Value returned by the server.
        value: Value,
    },
    /// The server reported an error.
    Error {
        /// Raw error detail.
        response: RawResponse,
    },
    /// The call never completed.
    Incomplete {
        /// Raw detail, usually empty.
        response: RawResponse,
    },
}

impl ActionResult {
    /// Successful outcome carrying `value`.
    pub fn success(value: impl Into<Value>) -> Self {
        Self::Success {
            value: value.into(),
        }
    }

    /// Error outcome carrying the given structured errors.
    pub fn error(errors: Vec<ErrorDetail>) -> Self {
        Self::Error {
            response: RawResponse { errors },
        }
    }

    /// Error outcome with a single message entry.
    pub fn error_message(message: impl Into<String>) -> Self {
        Self::error(vec![ErrorDetail::with_message(message)])
    }

    /// Incomplete outcome with an empty response.
    pub fn incomplete() -> Self {
        Self::Incomplete {
            response: RawResponse::default(),
        }
    }

    /// Outcome status.
    pub fn status(&self) -> Status {
        match self {
            Self::Success { .. } => Status::Success,
            Self::Error { .. } => Status::Error,
            Self::Incomplete { .. } => Status::Incomplete,
        }
    }

    /// Whether the call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returned value, present iff the call succeeded.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Success { value } => Some(value),
            _ => None,
        }
    }

    /// Raw response, present iff the call did not succeed.
    pub fn raw_response(&self) -> Option<&RawResponse> {
        match self {
            Self::Success { .. } => None,
            Self::Error { response } | Self::Incomplete { response } => Some(response),
        }
    }

    /// Split into the returned value or the failed outcome itself.
    pub fn into_value(self) -> Result<Value, Self> {
        match self {
            Self::Success { value } => Ok(value),
            failed => Err(failed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn exactly_one_side_is_populated() {
        let ok = ActionResult::success(json!({"id": 7}));
        assert_eq!(ok.value(), Some(&json!({"id": 7})));
        assert!(ok.raw_response().is_none());

        let err = ActionResult::error_message("boom");
        assert!(err.value().is_none());
        assert_eq!(err.raw_response().unwrap().first_message(), Some("boom"));

        let inc = ActionResult::incomplete();
        assert!(inc.value().is_none());
        assert!(inc.raw_response().is_some());
    }

    #[test]
    fn status_matches_variant() {
        assert_eq!(ActionResult::success(1).status(), Status::Success);
        assert_eq!(ActionResult::error(vec![]).status(), Status::Error);
        assert_eq!(ActionResult::incomplete().status(), Status::Incomplete);
    }

    #[test]
    fn into_value_splits_outcome() {
        assert_eq!(ActionResult::success("x").into_value(), Ok(json!("x")));
        let failed = ActionResult::incomplete();
        assert_eq!(failed.clone().into_value(), Err(failed));
    }

    #[test]
    fn status_wire_format() {
        assert_eq!(Status::Incomplete.to_string(), "INCOMPLETE");
        assert_eq!("ERROR".parse::<Status>(), Ok(Status::Error));
        assert!("error".parse::<Status>().is_err());
    }

    #[test]
    fn result_deserializes_host_payload() {
        let raw = json!({
            "state": "ERROR",
            "response": {"errors": [{"message": "field required", "fieldErrors": {}}]}
        });
        let result: ActionResult = serde_json::from_value(raw).unwrap();
        let response = result.raw_response().unwrap();
        assert_eq!(response.first_message(), Some("field required"));
        assert!(response.errors[0].extra.contains_key("fieldErrors"));
    }

    #[test]
    fn first_message_skips_nothing() {
        let response = RawResponse {
            errors: vec![ErrorDetail::default(), ErrorDetail::with_message("second")],
        };
        assert_eq!(response.first_message(), None);
    }

    #[test]
    fn descriptor_params() {
        let mut d = ActionDescriptor::new(ActionName::new("save").unwrap());
        d.set_param("id", 3);
        d.set_param("id", 4);
        assert_eq!(d.params.get("id"), Some(&json!(4)));
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            json!({"target": "c.save", "params": {"id": 4}})
        );
    }
}
