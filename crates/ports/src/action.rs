//! Action invocation port.
//!
//! The host owns the transport. The SDK only resolves identifiers against
//! the caller's context and hands descriptors over together with a single
//! completion callback.

use lumen_core::{ActionDescriptor, ActionName, ActionResult};

/// Completion callback for one enqueued action. Invoked exactly once.
pub type ActionCallback = Box<dyn FnOnce(ActionResult) + Send + 'static>;

/// An action identifier could not be resolved against the caller context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{action}` is an invalid action: {reason}")]
pub struct ResolutionError {
    /// The normalized identifier that was looked up.
    pub action: ActionName,
    /// Host-supplied reason.
    pub reason: String,
}

impl ResolutionError {
    /// Create a resolution error for `action`.
    pub fn new(action: ActionName, reason: impl Into<String>) -> Self {
        Self {
            action,
            reason: reason.into(),
        }
    }
}

/// The caller context: resolves action identifiers and enqueues calls.
///
/// Contract for [`enqueue`](Self::enqueue):
/// - the callback is invoked exactly once, on a later turn of the loop;
/// - a host that drops the callback without invoking it signals that the
///   call never completed.
pub trait ActionHost: Send + Sync {
    /// Resolve `name` into a descriptor with no parameters bound.
    fn resolve(&self, name: &ActionName) -> Result<ActionDescriptor, ResolutionError>;

    /// Enqueue `descriptor` for eventual execution.
    fn enqueue(&self, descriptor: ActionDescriptor, callback: ActionCallback);
}
