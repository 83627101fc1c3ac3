//! The single crossing point between SDK code and the host.
//!
//! Every host callback and every deferred scheduling step passes through
//! [`HostBoundary`], which applies the host's [`Reentrancy`] guard exactly
//! once. Code above the boundary never wraps anything itself.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use lumen_core::{ActionDescriptor, ActionName, ActionResult, Params, SdkConfig, Status};
use lumen_notify::ToastFactory;
use lumen_ports::{
    ActionCallback, ActionHost, ComponentFactory, ComponentOutcome, NotificationSurface,
    Reentrancy, ResolutionError, Scheduler, Task, Unguarded,
};
use serde_json::Value;
use tokio::sync::oneshot;

use crate::error::ActionError;
use crate::promise::Promise;
use crate::response::{Classifier, Response};

/// Host primitives plus the SDK configuration, bundled behind one adapter.
///
/// Implements [`Scheduler`] itself: tasks scheduled through the boundary are
/// wrapped by the reentrancy guard before they reach the host loop.
pub struct HostBoundary {
    host: Arc<dyn ActionHost>,
    scheduler: Arc<dyn Scheduler>,
    reentrancy: Arc<dyn Reentrancy>,
    surface: Arc<dyn NotificationSurface>,
    components: Option<Arc<dyn ComponentFactory>>,
    config: SdkConfig,
    classifier: Classifier,
    toasts: ToastFactory,
}

impl HostBoundary {
    /// Start building a boundary over the mandatory host primitives.
    pub fn builder(
        host: Arc<dyn ActionHost>,
        scheduler: Arc<dyn Scheduler>,
        surface: Arc<dyn NotificationSurface>,
    ) -> HostBoundaryBuilder {
        HostBoundaryBuilder {
            host,
            scheduler,
            surface,
            reentrancy: Arc::new(Unguarded),
            components: None,
            config: SdkConfig::default(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Classifier built from the configured messages.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Toast factory built from the configured toast defaults.
    pub fn toasts(&self) -> &ToastFactory {
        &self.toasts
    }

    /// The notification surface.
    pub fn surface(&self) -> &dyn NotificationSurface {
        self.surface.as_ref()
    }

    /// Resolve `name` against the caller context.
    pub fn resolve(&self, name: &ActionName) -> Result<ActionDescriptor, ResolutionError> {
        self.host.resolve(name)
    }

    /// Hand `descriptor` to the host with a guarded completion callback.
    ///
    /// The callback runs inside the reentrancy guard. If the host drops the
    /// callback without calling it, the callback receives an `INCOMPLETE`
    /// result instead.
    pub fn enqueue(&self, descriptor: ActionDescriptor, callback: ActionCallback) {
        tracing::debug!(action = %descriptor.target, params = descriptor.params.len(), "enqueueing action");
        let slot = CompletionSlot {
            action: descriptor.target.clone(),
            callback: Some(callback),
            guard: Arc::clone(&self.reentrancy),
        };
        self.host
            .enqueue(descriptor, Box::new(move |result| slot.complete(result)));
    }

    /// Enqueue `descriptor` now and return its eventual outcome.
    ///
    /// The host call is made before this function returns; the future only
    /// observes the result.
    pub fn invoke(
        &self,
        descriptor: ActionDescriptor,
    ) -> impl Future<Output = ActionResult> + Send + use<> {
        let (tx, rx) = oneshot::channel();
        self.enqueue(
            descriptor,
            Box::new(move |result| {
                let _ = tx.send(result);
            }),
        );
        async move { rx.await.unwrap_or_else(|_| ActionResult::incomplete()) }
    }

    /// Show the long error toast for a failed outcome.
    ///
    /// Fire-and-forget: surface failures are logged and swallowed. Returns
    /// whether the toast was shown.
    pub fn notify_failure(&self, result: &ActionResult) -> bool {
        let message = self.classifier.classify(&Response::from(result));
        tracing::warn!(status = %result.status(), message = %message, "action failed");
        self.toasts.long_error(message).fire(self.surface.as_ref())
    }

    /// Ask the host to create components; the promise settles with the
    /// created handles in request order.
    pub fn create_components(&self, specs: Vec<(String, Params)>) -> Promise<Vec<Value>> {
        let Some(factory) = self.components.clone() else {
            return Promise::rejected(ActionError::Component {
                status: Status::Error,
                message: "no component factory is available".to_owned(),
            });
        };
        let guard = Arc::clone(&self.reentrancy);
        Promise::new(move |settler| {
            factory.create_components(
                specs,
                Box::new(move |outcome: ComponentOutcome| {
                    let task = guard.wrap(Box::new(move || match outcome.status {
                        Status::Success => settler.resolve(outcome.components),
                        status => settler.reject(ActionError::Component {
                            status,
                            message: outcome.error_message.unwrap_or_default(),
                        }),
                    }));
                    task();
                }),
            );
        })
    }
}

impl Scheduler for HostBoundary {
    fn schedule(&self, task: Task) {
        self.scheduler.schedule(self.reentrancy.wrap(task));
    }
}

impl fmt::Debug for HostBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBoundary")
            .field("config", &self.config)
            .field("components", &self.components.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`HostBoundary`].
pub struct HostBoundaryBuilder {
    host: Arc<dyn ActionHost>,
    scheduler: Arc<dyn Scheduler>,
    surface: Arc<dyn NotificationSurface>,
    reentrancy: Arc<dyn Reentrancy>,
    components: Option<Arc<dyn ComponentFactory>>,
    config: SdkConfig,
}

impl HostBoundaryBuilder {
    /// Use the host's reentrancy guard (defaults to [`Unguarded`]).
    pub fn reentrancy(mut self, reentrancy: Arc<dyn Reentrancy>) -> Self {
        self.reentrancy = reentrancy;
        self
    }

    /// Enable component creation.
    pub fn components(mut self, factory: Arc<dyn ComponentFactory>) -> Self {
        self.components = Some(factory);
        self
    }

    /// Override the default configuration.
    pub fn config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    /// Finish the boundary.
    pub fn build(self) -> Arc<HostBoundary> {
        Arc::new(HostBoundary {
            classifier: Classifier::with_messages(self.config.messages.clone()),
            toasts: ToastFactory::new(self.config.toast.clone()),
            host: self.host,
            scheduler: self.scheduler,
            reentrancy: self.reentrancy,
            surface: self.surface,
            components: self.components,
            config: self.config,
        })
    }
}

/// Owns one host completion callback until it runs.
struct CompletionSlot {
    action: ActionName,
    callback: Option<ActionCallback>,
    guard: Arc<dyn Reentrancy>,
}

impl CompletionSlot {
    fn complete(mut self, result: ActionResult) {
        if let Some(callback) = self.callback.take() {
            run_guarded(self.guard.as_ref(), callback, result);
        }
    }
}

impl Drop for CompletionSlot {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            tracing::warn!(action = %self.action, "host dropped the action callback without completing it");
            run_guarded(self.guard.as_ref(), callback, ActionResult::incomplete());
        }
    }
}

fn run_guarded(guard: &dyn Reentrancy, callback: ActionCallback, result: ActionResult) {
    let task = guard.wrap(Box::new(move || callback(result)));
    task();
}
