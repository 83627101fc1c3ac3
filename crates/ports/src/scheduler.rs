//! Event-loop scheduling and the host reentrancy guard.

use std::collections::VecDeque;
use std::fmt;

use parking_lot::Mutex;
use tokio::runtime::{Handle, RuntimeFlavor};

use crate::error::PortsError;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks on a later turn of the host event loop.
///
/// `schedule` must never run the task inline: callers rely on at least one
/// yield between scheduling and execution.
pub trait Scheduler: Send + Sync {
    /// Queue `task` for a later turn.
    fn schedule(&self, task: Task);
}

/// The host's callback-safety wrapper.
///
/// Given a task, returns an equivalent task that may be invoked from outside
/// the host's managed call stack (timers, host callbacks). The returned task
/// is responsible for containing anything the inner task lets escape.
pub trait Reentrancy: Send + Sync {
    /// Wrap `task` for execution outside the host call stack.
    fn wrap(&self, task: Task) -> Task;
}

/// Identity guard for hosts without a managed call stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unguarded;

impl Reentrancy for Unguarded {
    fn wrap(&self, task: Task) -> Task {
        task
    }
}

/// Deterministic single-threaded task queue.
///
/// Tasks run in FIFO order when the owner turns the loop with
/// [`run_once`](Self::run_once) or [`run_until_idle`](Self::run_until_idle).
/// Tasks scheduled while the loop is turning land at the back of the queue
/// and run on a later turn.
#[derive(Default)]
pub struct EventLoop {
    queue: Mutex<VecDeque<Task>>,
}

impl EventLoop {
    /// Create an empty loop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the oldest queued task. Returns `false` when the queue was empty.
    pub fn run_once(&self) -> bool {
        // The lock is released before the task runs so it can schedule more work.
        let next = self.queue.lock().pop_front();
        match next {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Turn the loop until no tasks remain. Returns how many tasks ran.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        while self.run_once() {
            ran += 1;
        }
        ran
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }
}

impl Scheduler for EventLoop {
    fn schedule(&self, task: Task) {
        self.queue.lock().push_back(task);
    }
}

impl fmt::Debug for EventLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLoop")
            .field("pending", &self.pending())
            .finish()
    }
}

/// Scheduler that spawns each task onto a current-thread tokio runtime.
///
/// Only current-thread runtimes are accepted. A scheduled task must not run
/// until the scheduling code yields back to the runtime, and a multi-thread
/// runtime may start it on another worker immediately. Schedule from the
/// runtime's own thread.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Schedule onto the runtime behind `handle`.
    ///
    /// Fails with [`PortsError::MultiThreaded`] unless the runtime is
    /// current-thread.
    pub fn new(handle: Handle) -> Result<Self, PortsError> {
        match handle.runtime_flavor() {
            RuntimeFlavor::CurrentThread => Ok(Self { handle }),
            flavor => Err(PortsError::MultiThreaded(format!("{flavor:?}"))),
        }
    }

    /// Schedule onto the runtime the caller is running in.
    pub fn current() -> Result<Self, PortsError> {
        let handle = Handle::try_current().map_err(|e| PortsError::NoRuntime(e.to_string()))?;
        Self::new(handle)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, task: Task) {
        let _ = self.handle.spawn(async move { task() });
    }
}
