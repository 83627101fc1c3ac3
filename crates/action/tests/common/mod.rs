//! Scripted in-memory host shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lumen_action::HostBoundary;
use lumen_core::{
    ActionDescriptor, ActionName, ActionResult, Environment, Params, SdkConfig, Status, ToastParams,
};
use lumen_ports::{
    ActionCallback, ActionHost, ComponentCallback, ComponentFactory, ComponentOutcome, EventLoop,
    NotificationSurface, PortsError, Reentrancy, ResolutionError, Task,
};
use parking_lot::Mutex;
use serde_json::{Value, json};

/// Ordered record of everything observable that happened.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }
}

/// Host that knows a fixed set of actions and parks callbacks until the
/// test completes them.
pub struct MockHost {
    known: Vec<String>,
    responses: Mutex<HashMap<String, ActionResult>>,
    pending: Mutex<Vec<(ActionDescriptor, ActionCallback)>>,
    enqueued: AtomicUsize,
    log: EventLog,
}

impl MockHost {
    pub fn new(known: &[&str], log: EventLog) -> Self {
        Self {
            known: known.iter().map(|s| (*s).to_owned()).collect(),
            responses: Mutex::new(HashMap::new()),
            pending: Mutex::new(Vec::new()),
            enqueued: AtomicUsize::new(0),
            log,
        }
    }

    /// Script the outcome for `action`; unscripted calls succeed with `null`.
    pub fn respond(&self, action: &str, result: ActionResult) {
        self.responses.lock().insert(action.to_owned(), result);
    }

    pub fn enqueued(&self) -> usize {
        self.enqueued.load(Ordering::SeqCst)
    }

    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }

    /// Descriptors of the parked calls, oldest first.
    pub fn pending_descriptors(&self) -> Vec<ActionDescriptor> {
        self.pending.lock().iter().map(|(d, _)| d.clone()).collect()
    }

    /// Complete every parked call with its scripted outcome.
    pub fn complete_all(&self) -> usize {
        let parked = std::mem::take(&mut *self.pending.lock());
        let count = parked.len();
        for (descriptor, callback) in parked {
            let result = self
                .responses
                .lock()
                .get(descriptor.target.as_str())
                .cloned()
                .unwrap_or_else(|| ActionResult::success(Value::Null));
            callback(result);
        }
        count
    }

    /// Drop every parked callback without calling it.
    pub fn drop_pending(&self) -> usize {
        let parked = std::mem::take(&mut *self.pending.lock());
        parked.len()
    }
}

impl ActionHost for MockHost {
    fn resolve(&self, name: &ActionName) -> Result<ActionDescriptor, ResolutionError> {
        if self.known.iter().any(|k| k == name.as_str()) {
            Ok(ActionDescriptor::new(name.clone()))
        } else {
            Err(ResolutionError::new(name.clone(), "unknown controller method"))
        }
    }

    fn enqueue(&self, descriptor: ActionDescriptor, callback: ActionCallback) {
        self.enqueued.fetch_add(1, Ordering::SeqCst);
        self.log.push(format!("enqueue:{}", descriptor.target));
        self.pending.lock().push((descriptor, callback));
    }
}

/// Surface that records toasts, optionally failing every call.
pub struct RecordingSurface {
    environment: Environment,
    failing: bool,
    shown: Mutex<Vec<ToastParams>>,
    log: EventLog,
}

impl RecordingSurface {
    pub fn new(environment: Environment, failing: bool, log: EventLog) -> Self {
        Self {
            environment,
            failing,
            shown: Mutex::new(Vec::new()),
            log,
        }
    }

    pub fn shown(&self) -> Vec<ToastParams> {
        self.shown.lock().clone()
    }
}

impl NotificationSurface for RecordingSurface {
    fn environment(&self) -> Environment {
        self.environment
    }

    fn show_toast(&self, params: &ToastParams) -> Result<(), PortsError> {
        if self.failing {
            self.log.push("toast-failed");
            return Err(PortsError::host("toast event unavailable"));
        }
        self.log.push(format!(
            "toast:{}",
            params.message.as_deref().unwrap_or_default()
        ));
        self.shown.lock().push(params.clone());
        Ok(())
    }
}

/// Guard that counts how many tasks it wrapped and how many of them ran.
#[derive(Default)]
pub struct CountingGuard {
    wrapped: AtomicUsize,
    ran: Arc<AtomicUsize>,
}

impl CountingGuard {
    pub fn wrapped(&self) -> usize {
        self.wrapped.load(Ordering::SeqCst)
    }

    pub fn ran(&self) -> usize {
        self.ran.load(Ordering::SeqCst)
    }
}

impl Reentrancy for CountingGuard {
    fn wrap(&self, task: Task) -> Task {
        self.wrapped.fetch_add(1, Ordering::SeqCst);
        let ran = Arc::clone(&self.ran);
        Box::new(move || {
            ran.fetch_add(1, Ordering::SeqCst);
            task();
        })
    }
}

/// Component factory that answers immediately; names starting with
/// `bad:` fail the whole request.
pub struct MockComponents {
    requests: Mutex<Vec<Vec<(String, Params)>>>,
}

impl MockComponents {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Vec<(String, Params)>> {
        self.requests.lock().clone()
    }
}

impl ComponentFactory for MockComponents {
    fn create_components(&self, specs: Vec<(String, Params)>, callback: ComponentCallback) {
        self.requests.lock().push(specs.clone());
        if let Some((name, _)) = specs.iter().find(|(name, _)| name.starts_with("bad:")) {
            callback(ComponentOutcome::failure(
                Status::Error,
                format!("unknown component {name}"),
            ));
            return;
        }
        let created = specs
            .into_iter()
            .map(|(name, params)| json!({ "component": name, "attributes": params }))
            .collect();
        callback(ComponentOutcome::success(created));
    }
}

pub const KNOWN_ACTIONS: &[&str] = &["c.getRecord", "c.saveRecord"];

/// Everything a scenario needs, wired through one boundary.
pub struct Harness {
    pub log: EventLog,
    pub host: Arc<MockHost>,
    pub events: Arc<EventLoop>,
    pub surface: Arc<RecordingSurface>,
    pub guard: Arc<CountingGuard>,
    pub components: Arc<MockComponents>,
    pub boundary: Arc<HostBoundary>,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(Environment::Lightning, false, SdkConfig::default())
    }

    pub fn with_failing_surface() -> Self {
        Self::build(Environment::Lightning, true, SdkConfig::default())
    }

    pub fn with_environment(environment: Environment) -> Self {
        Self::build(environment, false, SdkConfig::default())
    }

    pub fn with_config(config: SdkConfig) -> Self {
        Self::build(Environment::Lightning, false, config)
    }

    fn build(environment: Environment, failing: bool, config: SdkConfig) -> Self {
        let log = EventLog::default();
        let host = Arc::new(MockHost::new(KNOWN_ACTIONS, log.clone()));
        let events = Arc::new(EventLoop::new());
        let surface = Arc::new(RecordingSurface::new(environment, failing, log.clone()));
        let guard = Arc::new(CountingGuard::default());
        let components = Arc::new(MockComponents::new());
        let boundary = HostBoundary::builder(host.clone(), events.clone(), surface.clone())
            .reentrancy(guard.clone())
            .components(components.clone())
            .config(config)
            .build();
        Self {
            log,
            host,
            events,
            surface,
            guard,
            components,
            boundary,
        }
    }

    /// Turn the loop and complete host calls until nothing is left.
    pub fn settle(&self) {
        loop {
            let ran = self.events.run_until_idle();
            let completed = self.host.complete_all();
            if ran == 0 && completed == 0 {
                break;
            }
        }
    }
}
