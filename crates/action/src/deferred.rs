//! Minimal deferred bridge.
//!
//! A [`Deferred`] schedules its executor exactly once, on a later turn of the
//! event loop. Handlers registered on the same turn as construction therefore
//! always observe the outcome. Handlers registered after the outcome was
//! delivered never run.

use std::fmt;
use std::sync::Arc;

use lumen_ports::Scheduler;
use parking_lot::Mutex;

use crate::error::{ActionError, HandlerError};

type SuccessHandler<T> = Box<dyn FnOnce(T) -> Result<(), HandlerError> + Send>;
type ErrorHandler = Box<dyn FnOnce(ActionError) + Send>;
type FinallyHandler = Box<dyn FnOnce() + Send>;

struct Handlers<T> {
    on_success: Option<SuccessHandler<T>>,
    on_error: Option<ErrorHandler>,
    on_finally: Option<FinallyHandler>,
}

impl<T> Default for Handlers<T> {
    fn default() -> Self {
        Self {
            on_success: None,
            on_error: None,
            on_finally: None,
        }
    }
}

type Shared<T> = Arc<Mutex<Handlers<T>>>;

/// Callback bridge with one success, one error and one finally handler.
///
/// Registering a handler twice replaces the earlier one.
pub struct Deferred<T> {
    handlers: Shared<T>,
}

impl<T: Send + 'static> Deferred<T> {
    /// Schedule `executor` on `scheduler` and return the bridge.
    pub fn new<F>(scheduler: &dyn Scheduler, executor: F) -> Self
    where
        F: FnOnce(Settler<T>) + Send + 'static,
    {
        let handlers: Shared<T> = Arc::new(Mutex::new(Handlers::default()));
        let settler = Settler {
            handlers: Some(Arc::clone(&handlers)),
        };
        scheduler.schedule(Box::new(move || executor(settler)));
        Self { handlers }
    }

    /// Handler for the success value. An `Err` from it is delivered to the
    /// error handler as [`ActionError::Handler`].
    #[must_use]
    pub fn on_success<F>(self, handler: F) -> Self
    where
        F: FnOnce(T) -> Result<(), HandlerError> + Send + 'static,
    {
        self.handlers.lock().on_success = Some(Box::new(handler));
        self
    }

    /// Handler for the error path.
    #[must_use]
    pub fn on_error<F>(self, handler: F) -> Self
    where
        F: FnOnce(ActionError) + Send + 'static,
    {
        self.handlers.lock().on_error = Some(Box::new(handler));
        self
    }

    /// Handler that runs after either path.
    #[must_use]
    pub fn on_finally<F>(self, handler: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.handlers.lock().on_finally = Some(Box::new(handler));
        self
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.lock();
        f.debug_struct("Deferred")
            .field("on_success", &handlers.on_success.is_some())
            .field("on_error", &handlers.on_error.is_some())
            .field("on_finally", &handlers.on_finally.is_some())
            .finish()
    }
}

/// Delivers the outcome of a [`Deferred`].
///
/// Settling consumes the settler, so an outcome is delivered at most once.
/// Dropping it unsettled delivers [`ActionError::Abandoned`].
pub struct Settler<T> {
    handlers: Option<Shared<T>>,
}

impl<T> Settler<T> {
    /// Deliver a success value.
    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    /// Deliver an error.
    pub fn reject(self, error: ActionError) {
        self.settle(Err(error));
    }

    /// Deliver a prepared outcome.
    pub fn settle(mut self, outcome: Result<T, ActionError>) {
        if let Some(handlers) = self.handlers.take() {
            dispatch(&handlers, outcome);
        }
    }
}

impl<T> Drop for Settler<T> {
    fn drop(&mut self) {
        if let Some(handlers) = self.handlers.take() {
            tracing::warn!("deferred settler dropped without settling");
            dispatch(&handlers, Err(ActionError::Abandoned));
        }
    }
}

impl<T> fmt::Debug for Settler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settler").finish_non_exhaustive()
    }
}

fn dispatch<T>(shared: &Shared<T>, outcome: Result<T, ActionError>) {
    // Handlers are taken out before running so they may touch the bridge.
    let Handlers {
        on_success,
        on_error,
        on_finally,
    } = std::mem::take(&mut *shared.lock());

    let error = match outcome {
        Ok(value) => match on_success {
            Some(handler) => handler(value).err().map(ActionError::from),
            None => None,
        },
        Err(error) => Some(error),
    };

    if let Some(error) = error {
        match on_error {
            Some(handler) => handler(error),
            None => tracing::error!(error = %error, "unhandled deferred rejection"),
        }
    }

    if let Some(handler) = on_finally {
        handler();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::ActionResult;
    use lumen_ports::EventLoop;
    use pretty_assertions::assert_eq;

    type Log = Arc<Mutex<Vec<String>>>;

    fn recorder() -> Log {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn push(log: &Log, entry: impl Into<String>) {
        log.lock().push(entry.into());
    }

    fn observed<T: Send + 'static + fmt::Debug>(deferred: Deferred<T>, log: &Log) -> Deferred<T> {
        let (s, e, f) = (Arc::clone(log), Arc::clone(log), Arc::clone(log));
        deferred
            .on_success(move |v| {
                push(&s, format!("success:{v:?}"));
                Ok(())
            })
            .on_error(move |err| push(&e, format!("error:{err}")))
            .on_finally(move || push(&f, "finally"))
    }

    #[test]
    fn executor_waits_for_a_later_turn() {
        let el = EventLoop::new();
        let log = recorder();
        let ran = Arc::clone(&log);
        let _deferred = Deferred::<u32>::new(&el, move |settler| {
            push(&ran, "executor");
            settler.resolve(1);
        });
        assert!(log.lock().is_empty());
        assert_eq!(el.pending(), 1);
        el.run_until_idle();
        assert_eq!(log.lock().first().map(String::as_str), Some("executor"));
    }

    #[test]
    fn same_turn_registration_sees_value() {
        let el = EventLoop::new();
        let log = recorder();
        let deferred = Deferred::new(&el, |settler| settler.resolve(7_u32));
        let _deferred = observed(deferred, &log);
        el.run_until_idle();
        assert_eq!(*log.lock(), vec!["success:7", "finally"]);
    }

    #[test]
    fn rejection_runs_error_then_finally() {
        let el = EventLoop::new();
        let log = recorder();
        let deferred = Deferred::<u32>::new(&el, |settler| {
            settler.reject(ActionError::Failed(ActionResult::incomplete()));
        });
        let _deferred = observed(deferred, &log);
        el.run_until_idle();
        assert_eq!(
            *log.lock(),
            vec!["error:action finished with status INCOMPLETE", "finally"]
        );
    }

    #[test]
    fn failing_success_handler_funnels_into_error_path() {
        let el = EventLoop::new();
        let log = recorder();
        let (e, f) = (Arc::clone(&log), Arc::clone(&log));
        let _deferred = Deferred::new(&el, |settler| settler.resolve(1_u32))
            .on_success(|_| Err(HandlerError::new("bad row")))
            .on_error(move |err| push(&e, format!("error:{err}")))
            .on_finally(move || push(&f, "finally"));
        el.run_until_idle();
        assert_eq!(*log.lock(), vec!["error:handler error: bad row", "finally"]);
    }

    #[test]
    fn unhandled_rejection_still_runs_finally() {
        let el = EventLoop::new();
        let log = recorder();
        let f = Arc::clone(&log);
        let _deferred = Deferred::<u32>::new(&el, |settler| settler.reject(ActionError::Abandoned))
            .on_finally(move || push(&f, "finally"));
        el.run_until_idle();
        assert_eq!(*log.lock(), vec!["finally"]);
    }

    #[test]
    fn last_registration_wins() {
        let el = EventLoop::new();
        let log = recorder();
        let (first, second) = (Arc::clone(&log), Arc::clone(&log));
        let _deferred = Deferred::new(&el, |settler| settler.resolve(()))
            .on_success(move |()| {
                push(&first, "first");
                Ok(())
            })
            .on_success(move |()| {
                push(&second, "second");
                Ok(())
            });
        el.run_until_idle();
        assert_eq!(*log.lock(), vec!["second"]);
    }

    #[test]
    fn dropped_settler_delivers_abandoned() {
        let el = EventLoop::new();
        let log = recorder();
        let deferred = Deferred::<u32>::new(&el, drop);
        let _deferred = observed(deferred, &log);
        el.run_until_idle();
        assert_eq!(
            *log.lock(),
            vec!["error:promise was abandoned before it settled", "finally"]
        );
    }

    #[test]
    fn settler_can_outlive_the_turn() {
        let el = EventLoop::new();
        let log = recorder();
        let parked: Arc<Mutex<Option<Settler<&'static str>>>> = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&parked);
        let deferred = Deferred::new(&el, move |settler| *slot.lock() = Some(settler));
        let _deferred = observed(deferred, &log);
        el.run_until_idle();
        assert!(log.lock().is_empty());

        let settler = parked.lock().take();
        if let Some(settler) = settler {
            settler.resolve("late");
        }
        assert_eq!(*log.lock(), vec!["success:\"late\"", "finally"]);
    }
}
