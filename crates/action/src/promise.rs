//! Settle-once promise over a native future.
//!
//! [`Promise::new`] runs its executor immediately, like any promise
//! constructor, so host calls made by the executor happen at construction
//! time. The outcome is shared: every clone, and every chain built with
//! [`then`](Promise::then), [`catch`](Promise::catch) or
//! [`finally`](Promise::finally), observes the same single settlement, even
//! when it is awaited long after the promise settled.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::sync::oneshot;

use crate::error::ActionError;

/// Outcome of a settled promise.
pub type Settlement<T> = Result<T, ActionError>;

/// Settles a [`Promise`]. Consumed by settling, so a promise settles once.
///
/// Dropping the settler without settling rejects the promise with
/// [`ActionError::Abandoned`].
pub struct PromiseSettler<T> {
    tx: oneshot::Sender<Settlement<T>>,
}

impl<T> PromiseSettler<T> {
    /// Fulfil the promise with `value`.
    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    /// Reject the promise with `error`.
    pub fn reject(self, error: ActionError) {
        self.settle(Err(error));
    }

    /// Settle with a prepared outcome.
    pub fn settle(self, outcome: Settlement<T>) {
        // The receiver lives inside the shared future; it is only gone when
        // every promise handle has been dropped, and then nobody is listening.
        let _ = self.tx.send(outcome);
    }
}

impl<T> fmt::Debug for PromiseSettler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromiseSettler").finish_non_exhaustive()
    }
}

/// A settle-once, cloneable promise resolving to `Result<T, ActionError>`.
///
/// Only the executor is eager. Handlers attached with [`then`](Self::then),
/// [`then_or_else`](Self::then_or_else), [`catch`](Self::catch) and
/// [`finally`](Self::finally) run when the returned promise is polled; a
/// chain that is dropped unpolled never runs them. To run a chain without
/// awaiting it, hand it to an executor (for example `tokio::spawn`).
///
/// ```rust
/// use lumen_action::Promise;
///
/// let promise = Promise::new(|settler| settler.resolve(2))
///     .then(|n| Ok(n * 21));
/// let answer = futures::executor::block_on(promise);
/// assert_eq!(answer, Ok(42));
/// ```
pub struct Promise<T> {
    inner: Shared<BoxFuture<'static, Settlement<T>>>,
}

impl<T> Promise<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a promise and run `executor` immediately.
    pub fn new<F>(executor: F) -> Self
    where
        F: FnOnce(PromiseSettler<T>),
    {
        let (tx, rx) = oneshot::channel();
        executor(PromiseSettler { tx });
        Self::from_future(async move { rx.await.unwrap_or(Err(ActionError::Abandoned)) })
    }

    /// Wrap a future that produces the outcome.
    pub fn from_future<F>(future: F) -> Self
    where
        F: Future<Output = Settlement<T>> + Send + 'static,
    {
        Self {
            inner: future.boxed().shared(),
        }
    }

    /// Promise that is already fulfilled.
    pub fn resolved(value: T) -> Self {
        Self::from_future(futures::future::ready(Ok(value)))
    }

    /// Promise that is already rejected.
    pub fn rejected(error: ActionError) -> Self {
        Self::from_future(futures::future::ready(Err(error)))
    }

    /// Chain a success handler. Rejections pass through untouched; an `Err`
    /// from the handler rejects the new promise.
    pub fn then<U, F>(self, on_success: F) -> Promise<U>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> Settlement<U> + Send + 'static,
    {
        let inner = self.inner;
        Promise::from_future(async move { inner.await.and_then(on_success) })
    }

    /// Chain both a success and an error handler.
    pub fn then_or_else<U, F, G>(self, on_success: F, on_error: G) -> Promise<U>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> Settlement<U> + Send + 'static,
        G: FnOnce(ActionError) -> Settlement<U> + Send + 'static,
    {
        let inner = self.inner;
        Promise::from_future(async move {
            match inner.await {
                Ok(value) => on_success(value),
                Err(error) => on_error(error),
            }
        })
    }

    /// Chain an error handler that may recover with a value.
    pub fn catch<F>(self, on_error: F) -> Self
    where
        F: FnOnce(ActionError) -> Settlement<T> + Send + 'static,
    {
        let inner = self.inner;
        Self::from_future(async move { inner.await.or_else(on_error) })
    }

    /// Chain a handler that runs on either outcome; the outcome passes
    /// through unchanged.
    pub fn finally<F>(self, on_finally: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let inner = self.inner;
        Self::from_future(async move {
            let outcome = inner.await;
            on_finally();
            outcome
        })
    }

    /// The outcome, if the promise has already settled and been polled.
    pub fn peek(&self) -> Option<&Settlement<T>> {
        self.inner.peek()
    }
}

impl<T> Clone for Promise<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Future for Promise<T>
where
    T: Clone,
{
    type Output = Settlement<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner).poll(cx)
    }
}

impl<T> fmt::Debug for Promise<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Promise").finish_non_exhaustive()
    }
}
