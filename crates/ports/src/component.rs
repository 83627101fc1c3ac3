//! Component creation port.

use lumen_core::{Params, Status};
use serde_json::Value;

/// What the host reports after a component creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentOutcome {
    /// `Success` when every component was created.
    pub status: Status,
    /// Created component handles, in request order.
    pub components: Vec<Value>,
    /// Host error message for non-successful outcomes.
    pub error_message: Option<String>,
}

impl ComponentOutcome {
    /// Successful outcome.
    pub fn success(components: Vec<Value>) -> Self {
        Self {
            status: Status::Success,
            components,
            error_message: None,
        }
    }

    /// Failed outcome with `status` and a message.
    pub fn failure(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            components: Vec::new(),
            error_message: Some(message.into()),
        }
    }
}

/// Completion callback for one creation request. Invoked exactly once.
pub type ComponentCallback = Box<dyn FnOnce(ComponentOutcome) + Send + 'static>;

/// Creates declarative components from `(name, params)` pairs.
pub trait ComponentFactory: Send + Sync {
    /// Create all `specs` in one request.
    fn create_components(&self, specs: Vec<(String, Params)>, callback: ComponentCallback);
}
