//! Configured remote-call handles.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use lumen_core::{ActionDescriptor, ActionName, ActionResult, Params};
use serde_json::Value;

use crate::boundary::HostBoundary;
use crate::deferred::Deferred;
use crate::error::ActionError;
use crate::server::{self, ErrorPolicy};

/// One remote call, resolved against the host and ready to execute.
///
/// A handle whose identifier cannot be resolved stays inert: construction
/// logs the failure and every execution rejects with
/// [`ActionError::Unresolved`] without touching the host.
#[derive(Clone)]
pub struct ActionHandle {
    boundary: Arc<HostBoundary>,
    name: String,
    descriptor: Option<ActionDescriptor>,
}

impl ActionHandle {
    /// Resolve `name` (controller prefix added when missing) and bind
    /// `params` onto the resolved descriptor.
    pub fn new(boundary: Arc<HostBoundary>, name: &str, params: Option<Params>) -> Self {
        let prefix = boundary.config().controller_prefix.as_str();
        let (name, descriptor) = match ActionName::with_prefix(name, prefix) {
            Ok(action) => {
                let descriptor = match boundary.resolve(&action) {
                    Ok(mut descriptor) => {
                        if let Some(params) = params {
                            descriptor.set_params(params);
                        }
                        Some(descriptor)
                    }
                    Err(e) => {
                        tracing::error!(action = %action, error = %e, "failed to resolve action");
                        None
                    }
                };
                (action.to_string(), descriptor)
            }
            Err(e) => {
                tracing::error!(action = name, error = %e, "invalid action identifier");
                (name.to_owned(), None)
            }
        };
        Self {
            boundary,
            name,
            descriptor,
        }
    }

    /// Whether the handle resolved and can be executed.
    pub fn is_executable(&self) -> bool {
        self.descriptor.is_some()
    }

    /// The action identifier, prefixed when it was valid.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved descriptor, if any.
    pub fn descriptor(&self) -> Option<&ActionDescriptor> {
        self.descriptor.as_ref()
    }

    /// The boundary this handle calls through.
    pub fn boundary(&self) -> &Arc<HostBoundary> {
        &self.boundary
    }

    /// Replace all parameters. Returns `false` on an inert handle.
    pub fn set_params(&mut self, params: Params) -> bool {
        match self.descriptor.as_mut() {
            Some(descriptor) => {
                descriptor.set_params(params);
                true
            }
            None => false,
        }
    }

    /// Set one parameter. Returns `false` on an inert handle.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<Value>) -> bool {
        match self.descriptor.as_mut() {
            Some(descriptor) => {
                descriptor.set_param(name, value);
                true
            }
            None => false,
        }
    }

    /// Execute through the deferred bridge, forwarding failures to the
    /// error handler.
    pub fn execute(&self) -> Deferred<Value> {
        server::execute_deferred(self, ErrorPolicy::Forward)
    }

    /// Enqueue the call now and return the raw outcome.
    pub fn invoke(&self) -> Result<impl Future<Output = ActionResult> + Send + use<>, ActionError> {
        let descriptor = self.submission()?;
        Ok(self.boundary.invoke(descriptor))
    }

    /// A copy of the descriptor for one host submission.
    pub(crate) fn submission(&self) -> Result<ActionDescriptor, ActionError> {
        self.descriptor
            .clone()
            .ok_or_else(|| ActionError::Unresolved {
                action: self.name.clone(),
            })
    }
}

impl fmt::Debug for ActionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionHandle")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}
