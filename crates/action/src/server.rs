//! Server action execution policies.
//!
//! | Variant | Bridge | On `ERROR` / `INCOMPLETE` |
//! |---|---|---|
//! | [`ServerAction::plain`] + [`execute`](ServerAction::execute) | [`Deferred`] | error handler receives [`ActionError::Failed`] |
//! | [`ServerAction::handled`] + [`execute`](ServerAction::execute) | [`Deferred`] | long error toast, then the error handler |
//! | [`ServerAction::plain`] + [`execute_promise`](ServerAction::execute_promise) | [`Promise`] | rejects with [`ActionError::Failed`] |
//! | [`ServerAction::handled`] + [`execute_promise`](ServerAction::execute_promise) | [`Promise`] | long error toast, then rejects |
//!
//! Every variant enqueues the call on the host exactly once per execution
//! and delivers `SUCCESS` values the same way.

use std::sync::Arc;

use lumen_core::{ActionResult, Params};
use serde_json::Value;

use crate::boundary::HostBoundary;
use crate::deferred::Deferred;
use crate::error::ActionError;
use crate::handle::ActionHandle;
use crate::promise::Promise;

/// What happens, beyond rejection, when the host reports a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Hand the failure to the caller only.
    #[default]
    Forward,
    /// Show the long error toast before handing the failure to the caller.
    Notify,
}

/// An [`ActionHandle`] paired with an [`ErrorPolicy`].
#[derive(Debug, Clone)]
pub struct ServerAction {
    handle: ActionHandle,
    policy: ErrorPolicy,
}

impl ServerAction {
    /// Pair an existing handle with `policy`.
    pub fn new(handle: ActionHandle, policy: ErrorPolicy) -> Self {
        Self { handle, policy }
    }

    /// Action that forwards failures to the caller.
    pub fn plain(boundary: Arc<HostBoundary>, name: &str, params: Option<Params>) -> Self {
        Self::new(ActionHandle::new(boundary, name, params), ErrorPolicy::Forward)
    }

    /// Action that also shows an error toast on failure.
    pub fn handled(boundary: Arc<HostBoundary>, name: &str, params: Option<Params>) -> Self {
        Self::new(ActionHandle::new(boundary, name, params), ErrorPolicy::Notify)
    }

    /// The error policy.
    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// The underlying handle.
    pub fn handle(&self) -> &ActionHandle {
        &self.handle
    }

    /// Mutable access to the handle, for setting parameters.
    pub fn handle_mut(&mut self) -> &mut ActionHandle {
        &mut self.handle
    }

    /// Execute through the deferred bridge.
    pub fn execute(&self) -> Deferred<Value> {
        execute_deferred(&self.handle, self.policy)
    }

    /// Execute through the promise bridge. The host call is made before
    /// this returns.
    pub fn execute_promise(&self) -> Promise<Value> {
        let descriptor = match self.handle.submission() {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::error!(action = self.handle.name(), "executing an unresolved action");
                return Promise::rejected(e);
            }
        };
        let boundary = Arc::clone(self.handle.boundary());
        let policy = self.policy;
        Promise::new(move |settler| {
            let callback_boundary = Arc::clone(&boundary);
            boundary.enqueue(
                descriptor,
                Box::new(move |result| {
                    settler.settle(settle_outcome(&callback_boundary, policy, result));
                }),
            );
        })
    }
}

pub(crate) fn execute_deferred(handle: &ActionHandle, policy: ErrorPolicy) -> Deferred<Value> {
    let boundary = Arc::clone(handle.boundary());
    let submission = handle.submission();
    Deferred::new(handle.boundary().as_ref(), move |settler| {
        let descriptor = match submission {
            Ok(descriptor) => descriptor,
            Err(e) => {
                tracing::error!(error = %e, "executing an unresolved action");
                settler.reject(e);
                return;
            }
        };
        let callback_boundary = Arc::clone(&boundary);
        boundary.enqueue(
            descriptor,
            Box::new(move |result| {
                settler.settle(settle_outcome(&callback_boundary, policy, result));
            }),
        );
    })
}

fn settle_outcome(
    boundary: &HostBoundary,
    policy: ErrorPolicy,
    result: ActionResult,
) -> Result<Value, ActionError> {
    result.into_value().map_err(|failed| {
        if policy == ErrorPolicy::Notify {
            boundary.notify_failure(&failed);
        }
        ActionError::Failed(failed)
    })
}
